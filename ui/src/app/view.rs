use crate::app::context::AppContext;
use crate::components::{render_header, render_layout};
use crate::error::AppResult;
use crate::pages::contact::{SubmissionOutcome, render_contact};
use crate::pages::{Page, render_about, render_home};

/// Render `page` as a complete screen under the active theme.
///
/// The Home page mounts the products feed and waits for its cycle to
/// settle; failures end up in the page body, never as an error here.
pub async fn render_page(
    ctx: &AppContext,
    page: Page,
    outcome: Option<&SubmissionOutcome>,
) -> AppResult<String> {
    let manager = ctx.theme()?;
    let painter = ctx.painter()?;

    let body = match page {
        Page::Home => {
            let mut handle = ctx.products().mount();
            let state = handle.settled().await;
            render_home(&painter, &state)
        }
        Page::About => render_about(&painter),
        Page::Contact => render_contact(&painter, outcome),
    };

    let header = render_header(
        &painter,
        page,
        manager.state(),
        &manager.available_themes(),
    );
    Ok(render_layout(&painter, header, body))
}
