//! Scoped document/window title updates.
//!
//! Navigating into a section retitles the surrounding surface (browser
//! tab, terminal window, whatever hosts the UI); leaving it must restore
//! the default. Modeled as an RAII guard so restoration cannot be
//! forgotten on any exit path.

/// The default title restored when no section is active.
pub const SITE_TITLE: &str = "Pixel Shop";

/// Wherever the title ends up — a browser tab, a terminal escape, a test
/// recorder.
pub trait TitleSink {
    fn set_title(&self, title: &str);
}

/// Sets `"{section} - Pixel Shop"` on entry and restores [`SITE_TITLE`]
/// when dropped.
pub struct SectionTitle<'a, S: TitleSink + ?Sized> {
    sink: &'a S,
}

impl<'a, S: TitleSink + ?Sized> SectionTitle<'a, S> {
    /// Applies the section title. Bind the guard — dropping it immediately
    /// restores the default on the spot.
    #[must_use]
    pub fn enter(sink: &'a S, section: &str) -> Self {
        sink.set_title(&format!("{section} - {SITE_TITLE}"));
        Self { sink }
    }
}

impl<S: TitleSink + ?Sized> Drop for SectionTitle<'_, S> {
    fn drop(&mut self) {
        self.sink.set_title(SITE_TITLE);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingSink {
        titles: RefCell<Vec<String>>,
    }

    impl TitleSink for RecordingSink {
        fn set_title(&self, title: &str) {
            self.titles.borrow_mut().push(title.to_string());
        }
    }

    #[test]
    fn enter_sets_the_section_title_and_drop_restores_the_default() {
        let sink = RecordingSink::default();
        {
            let _guard = SectionTitle::enter(&sink, "Products");
            assert_eq!(sink.titles.borrow().as_slice(), ["Products - Pixel Shop"]);
        }
        assert_eq!(
            sink.titles.borrow().as_slice(),
            ["Products - Pixel Shop", "Pixel Shop"]
        );
    }

    #[test]
    fn nested_sections_restore_in_reverse_order() {
        let sink = RecordingSink::default();
        {
            let _outer = SectionTitle::enter(&sink, "Products");
            {
                let _inner = SectionTitle::enter(&sink, "Cart");
            }
            // Inner drop restored the default; the outer guard's section
            // is gone but the default is guaranteed.
            assert_eq!(sink.titles.borrow().last().map(String::as_str), Some(SITE_TITLE));
        }
        assert_eq!(sink.titles.borrow().last().map(String::as_str), Some(SITE_TITLE));
    }
}
