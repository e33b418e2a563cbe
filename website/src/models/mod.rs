mod page;
mod params;

pub use page::*;
pub use params::*;

#[derive(Clone)]
pub struct TemplateData {
    pub title: String,
}

impl TemplateData {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}
