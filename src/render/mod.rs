//! Rendering module: Android layout XML emission, JSON dumps, and the
//! binding/enum stub writer.

mod attrs;
mod json;
mod layout;
mod options;
mod stats;
pub mod stubs;
mod xml;

pub use attrs::{
    set_height, set_id, set_image_source, set_margin_left, set_margin_top, set_namespaces,
    set_width, Dimension, ANDROID_HEIGHT, ANDROID_ID, ANDROID_MARGIN_LEFT, ANDROID_MARGIN_TOP,
    ANDROID_WIDTH, APP_SRC_COMPAT,
};
pub use json::{to_json, JsonFormat};
pub use layout::{render_layout, LayoutRenderer};
pub use options::{DataBinding, RenderOptions};
pub use stats::{RenderResult, RenderStats};
pub use xml::{to_xml_string, MarkupElement};
