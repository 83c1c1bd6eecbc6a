use std::path::Path;

use crate::app::{AppContext, DeckError, Result};
use crate::cli::FilterArgs;
use crate::domain::RecordId;
use crate::render::html::render_page;
use crate::render::text::render_text;

pub async fn list_cards(ctx: &AppContext, filter: &FilterArgs) -> Result<()> {
    let mut controller = ctx.open_controller().await;
    controller.set_criteria(filter.criteria());

    if controller.view().is_empty() {
        println!("No cards");
        return Ok(());
    }

    print!("{}", render_text(controller.view()));
    println!();
    println!(
        "{} of {} cards",
        controller.view().len(),
        controller.records().len()
    );
    Ok(())
}

pub async fn list_authors(ctx: &AppContext) -> Result<()> {
    let controller = ctx.open_controller().await;

    if controller.authors().is_empty() {
        println!("No authors");
        return Ok(());
    }

    for author in controller.authors() {
        println!("{}", author);
    }
    Ok(())
}

pub async fn toggle_favorite(ctx: &AppContext, id: RecordId) -> Result<()> {
    let mut controller = ctx.open_controller().await;

    let title = controller
        .record(id)
        .map(|r| r.display_title().to_string())
        .ok_or(DeckError::RecordNotFound(id))?;

    let outcome = controller.toggle_favorite(id);
    if outcome.favorited {
        println!("Added to favorites: [{}] {}", id, title);
    } else {
        println!("Removed from favorites: [{}] {}", id, title);
    }
    Ok(())
}

pub async fn export_html(
    ctx: &AppContext,
    out: &Path,
    title: &str,
    filter: &FilterArgs,
) -> Result<()> {
    let mut controller = ctx.open_controller().await;
    controller.set_criteria(filter.criteria());

    let page = render_page(title, controller.view());
    tokio::fs::write(out, page).await?;

    println!(
        "Wrote {} cards to {}",
        controller.view().len(),
        out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SourceChoice;

    #[tokio::test]
    async fn test_toggle_unknown_record_is_error() {
        let ctx = AppContext::in_memory(SourceChoice::Builtin).unwrap();
        let err = toggle_favorite(&ctx, 404).await.unwrap_err();
        assert!(matches!(err, DeckError::RecordNotFound(404)));
    }

    #[tokio::test]
    async fn test_toggle_known_record_persists() {
        let ctx = AppContext::in_memory(SourceChoice::Builtin).unwrap();
        toggle_favorite(&ctx, 1).await.unwrap();

        let controller = ctx.open_controller().await;
        assert!(controller.favorites().contains(1));
    }

    #[tokio::test]
    async fn test_export_writes_filtered_page() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("deck.html");
        let ctx = AppContext::in_memory(SourceChoice::Builtin).unwrap();
        let filter = FilterArgs {
            search: "optimization".into(),
            ..Default::default()
        };

        export_html(&ctx, &out, "Deck", &filter).await.unwrap();

        let page = std::fs::read_to_string(&out).unwrap();
        assert!(page.contains("Premature optimization"));
        assert!(!page.contains("Programs are for people"));
    }
}
