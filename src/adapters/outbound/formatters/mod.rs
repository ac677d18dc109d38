/// Formatter adapters that render check results for the results panel
mod html_renderer;

pub use html_renderer::HtmlResultRenderer;
