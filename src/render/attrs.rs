//! Attribute formatter: Android layout attribute names, units, and value
//! prefixes.

use super::xml::MarkupElement;

pub const ANDROID_ID: &str = "android:id";
pub const ANDROID_WIDTH: &str = "android:layout_width";
pub const ANDROID_HEIGHT: &str = "android:layout_height";
pub const ANDROID_MARGIN_LEFT: &str = "android:layout_marginLeft";
pub const ANDROID_MARGIN_TOP: &str = "android:layout_marginTop";
pub const APP_SRC_COMPAT: &str = "app:srcCompat";

/// Namespace declarations carried by the root element. The URIs belong to
/// the consuming Android build toolchain and must be reproduced exactly.
pub const XMLNS_ANDROID: (&str, &str) = (
    "xmlns:android",
    "http://schemas.android.com/apk/res/android",
);
pub const XMLNS_APP: (&str, &str) = ("xmlns:app", "http://schemas.android.com/apk/res-auto");
pub const XMLNS_TOOLS: (&str, &str) = ("xmlns:tools", "http://schemas.android.com/tools");

/// A layout dimension value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Fixed size in density-independent pixels
    Dp(u32),
    /// Fill the available space
    MatchParent,
}

impl std::fmt::Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::Dp(n) => write!(f, "{}dp", n),
            Dimension::MatchParent => write!(f, "match_parent"),
        }
    }
}

/// Set the three namespace declarations on a root element.
pub fn set_namespaces(elem: &mut MarkupElement) {
    elem.set_attr(XMLNS_ANDROID.0, XMLNS_ANDROID.1);
    elem.set_attr(XMLNS_APP.0, XMLNS_APP.1);
    elem.set_attr(XMLNS_TOOLS.0, XMLNS_TOOLS.1);
}

/// Set the element identifier, with the `@+id/` reference prefix.
pub fn set_id(elem: &mut MarkupElement, id: &str) {
    elem.set_attr(ANDROID_ID, format!("@+id/{}", id));
}

/// Set the layout width.
pub fn set_width(elem: &mut MarkupElement, dim: Dimension) {
    elem.set_attr(ANDROID_WIDTH, dim.to_string());
}

/// Set the layout height.
pub fn set_height(elem: &mut MarkupElement, dim: Dimension) {
    elem.set_attr(ANDROID_HEIGHT, dim.to_string());
}

/// Set the left margin in dp.
pub fn set_margin_left(elem: &mut MarkupElement, dp: i32) {
    elem.set_attr(ANDROID_MARGIN_LEFT, format!("{}dp", dp));
}

/// Set the top margin in dp.
pub fn set_margin_top(elem: &mut MarkupElement, dp: i32) {
    elem.set_attr(ANDROID_MARGIN_TOP, format!("{}dp", dp));
}

/// Set the image source, referencing an exported asset by name.
pub fn set_image_source(elem: &mut MarkupElement, asset: &str) {
    elem.set_attr(APP_SRC_COMPAT, format!("@drawable/{}", asset));
}
