use crate::app::context::AppContext;
use crate::app::view::render_page;
use crate::cli::{Commands, ThemeCommands};
use crate::error::AppResult;
use crate::pages::contact::{ContactForm, SubmissionOutcome, submit};
use crate::pages::Page;
use crate::theme::ThemeId;

/// Execute one command and return the text to print
pub async fn dispatch(ctx: &AppContext, command: Commands) -> AppResult<String> {
    match command {
        Commands::Home => render_page(ctx, Page::Home, None).await,
        Commands::About => render_page(ctx, Page::About, None).await,
        Commands::Contact {
            name,
            email,
            phone,
            subject,
            message,
        } => {
            let form = match (name, email, subject, message) {
                (Some(name), Some(email), Some(subject), Some(message)) => Some(ContactForm {
                    name,
                    email,
                    phone,
                    subject,
                    message,
                }),
                _ => None,
            };
            let outcome = form.as_ref().map(handle_contact_submitted);
            render_page(ctx, Page::Contact, outcome.as_ref()).await
        }
        Commands::Theme { command } => update_theme(ctx, command).await,
    }
}

fn handle_contact_submitted(form: &ContactForm) -> SubmissionOutcome {
    match submit(form) {
        Ok(_) => SubmissionOutcome::Accepted,
        Err(errors) => {
            log::warn!("Contact form rejected with {} problem(s)", errors.len());
            SubmissionOutcome::Rejected(errors)
        }
    }
}

async fn update_theme(ctx: &AppContext, command: ThemeCommands) -> AppResult<String> {
    let manager = ctx.theme()?;

    match command {
        ThemeCommands::Show => {
            let current = manager.current();
            Ok(format!("{current} ({})\n", current.label()))
        }
        ThemeCommands::List => {
            let current = manager.current();
            let mut out = String::new();
            for (id, label) in manager.available_themes() {
                let marker = if id == current { '*' } else { ' ' };
                out.push_str(&format!("{marker} {id}  {label}\n"));
            }
            Ok(out)
        }
        ThemeCommands::Set { theme } => {
            let next: ThemeId = theme.parse()?;
            handle_theme_selected(ctx, next).await
        }
    }
}

async fn handle_theme_selected(ctx: &AppContext, next: ThemeId) -> AppResult<String> {
    let manager = ctx.theme()?;
    let previous = manager.current();

    manager.set_theme(next);
    manager.wait_idle().await;

    if previous == next {
        log::debug!("Theme {next} was already active");
        return Ok(format!("Theme already set to {} ({next})\n", next.label()));
    }

    log::info!("Successfully switched theme from {previous} to {next}");
    Ok(format!("Theme set to {} ({next})\n", next.label()))
}
