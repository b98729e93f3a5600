//! Template renderers.

mod tera;

pub use self::tera::TeraRenderer;
