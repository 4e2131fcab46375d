use super::config::HtmlOptions;
use super::traits::ToHtml;
use super::writer::HtmlWriter;
/// ToHtml implementations for deck types.
///
/// This module implements the `ToHtml` trait for [`Deck`] and [`Slide`].
use crate::common::Result;
use crate::deck::{Deck, Slide};

impl ToHtml for Deck {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        let mut writer = HtmlWriter::new(*options);

        for slide in self.slides() {
            writer.write_slide(slide)?;
        }

        Ok(writer.finish())
    }
}

impl ToHtml for Slide {
    fn to_html_with_options(&self, options: &HtmlOptions) -> Result<String> {
        let mut writer = HtmlWriter::new(*options);
        writer.write_slide(self)?;
        Ok(writer.finish())
    }
}
