//! Ratatui widgets for the search screen

mod filter_bar;
mod help_bar;
mod help_overlay;
mod result_list;
mod search_bar;
mod status_bar;
mod tag_list;

pub use filter_bar::FilterBar;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use result_list::ResultList;
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
pub use tag_list::TagList;

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
