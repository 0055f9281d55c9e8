use iced::Size;

use crate::widgets::title_bar::view::TITLE_BAR_HEIGHT;

pub(crate) const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;

/// Area below the title bar and its separator.
pub(crate) fn screen_size_from_window(window_size: Size) -> Size {
    let chrome = TITLE_BAR_HEIGHT + HEADER_SEPARATOR_HEIGHT;
    let height = (window_size.height - chrome).max(0.0);

    Size::new(window_size.width, height)
}

/// Area left for routed content next to the sidebar.
pub(crate) fn content_size(screen_size: Size, sidebar_width: f32) -> Size {
    Size::new(
        (screen_size.width - sidebar_width).max(0.0),
        screen_size.height,
    )
}

#[cfg(test)]
mod tests {
    use iced::Size;

    use super::{content_size, screen_size_from_window};
    use crate::widgets::title_bar::view::TITLE_BAR_HEIGHT;

    #[test]
    fn given_window_size_when_computing_screen_then_header_is_subtracted() {
        let screen = screen_size_from_window(Size::new(1200.0, 800.0));

        assert_eq!(screen.width, 1200.0);
        assert_eq!(screen.height, 800.0 - TITLE_BAR_HEIGHT - 1.0);
    }

    #[test]
    fn given_tiny_window_when_computing_screen_then_height_is_not_negative() {
        let screen = screen_size_from_window(Size::new(100.0, 10.0));

        assert_eq!(screen.height, 0.0);
    }

    #[test]
    fn given_sidebar_width_when_computing_content_then_width_is_reduced() {
        let content = content_size(Size::new(1000.0, 700.0), 254.0);

        assert_eq!(content, Size::new(746.0, 700.0));
    }

    #[test]
    fn given_sidebar_wider_than_screen_when_computing_content_then_zero() {
        let content = content_size(Size::new(200.0, 700.0), 604.0);

        assert_eq!(content.width, 0.0);
    }
}
