//! Tags command - print the tag catalog

use crate::{
    RoboSearchError,
    backend::SearchBackend,
    catalog::TagCatalog,
    controller::SearchClient,
    output,
    query::QueryState,
};

type Result<T> = std::result::Result<T, RoboSearchError>;

/// Execute the tags command
///
/// # Errors
/// Returns an error if the unfiltered listing cannot be fetched
pub async fn execute<B: SearchBackend>(backend: B, quiet: bool) -> Result<()> {
    let mut client = SearchClient::new(backend, QueryState::new());
    let _ = client.fetch_all_tags().await;

    let controller = client.controller();
    if let Some(message) = controller.tag_status().error_message() {
        return Err(RoboSearchError::RequestFailed(message.to_string()));
    }

    for line in render(controller.catalog(), quiet) {
        println!("{line}");
    }
    Ok(())
}

fn render(catalog: &TagCatalog, quiet: bool) -> Vec<String> {
    if catalog.is_empty() {
        return if quiet {
            Vec::new()
        } else {
            vec!["No tags found.".to_string()]
        };
    }

    let mut lines = Vec::with_capacity(catalog.len() + 1);
    if !quiet {
        lines.push(format!("Tags ({}):", catalog.len()));
    }
    lines.extend(catalog.tags().iter().map(|tag| {
        if quiet {
            tag.clone()
        } else {
            format!("  {}", output::tag_chip(tag))
        }
    }));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::FetchError;
    use crate::controller::TAGS_FAILED_MESSAGE;
    use crate::testing::MockBackend;

    #[test]
    fn test_render_quiet_is_plain() {
        let catalog = TagCatalog::from_raw_tags(["ros2", "robotic-arm"]);
        assert_eq!(render(&catalog, true), vec!["robotic arm", "ros2"]);
    }

    #[test]
    fn test_render_empty() {
        let catalog = TagCatalog::new();
        assert!(render(&catalog, true).is_empty());
        assert_eq!(render(&catalog, false), vec!["No tags found."]);
    }

    #[test]
    fn test_render_header_counts_tags() {
        colored::control::set_override(false);
        let catalog = TagCatalog::from_raw_tags(["lidar"]);
        assert_eq!(render(&catalog, false), vec!["Tags (1):", "  #lidar"]);
    }

    #[tokio::test]
    async fn test_failed_listing_is_an_error() {
        let backend = MockBackend::new().with_listing(Err(FetchError::Status(503)));

        let err = execute(backend, true).await.unwrap_err();
        assert!(matches!(err, RoboSearchError::RequestFailed(ref m) if m == TAGS_FAILED_MESSAGE));
    }
}
