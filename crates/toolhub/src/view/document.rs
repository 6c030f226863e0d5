use crate::i18n::keys;
use crate::router::{Route, Theme};
use crate::view::{PageView, RenderContext, html_escape};

/// Wrap a page in the full HTML document: `lang`/`dir` attributes, the
/// header with the language switcher, and the footer.
pub fn render_document(view: &PageView, theme: Theme, ctx: &RenderContext<'_>) -> String {
    let site_name = html_escape(ctx.t(keys::SITE_NAME));
    let hidden = |visible: bool| if visible { "" } else { " hidden" };

    let mut html = String::new();
    html.push_str("<!doctype html>\n");
    html.push_str(&format!(
        "<html lang=\"{}\" dir=\"{}\" class=\"{}\">\n",
        ctx.language.code(),
        ctx.language.direction().as_str(),
        theme.as_str()
    ));
    html.push_str("<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n");
    html.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
    );
    html.push_str(&format!("  <title>{site_name}</title>\n"));
    html.push_str("</head>\n");
    html.push_str("<body class=\"bg-dark-bg text-dark-text\">\n");
    html.push_str(&format!(
        "<header id=\"main-header\" class=\"bg-dark-card shadow-md\"{}>\n",
        hidden(view.chrome.header)
    ));
    html.push_str(
        "  <nav class=\"container mx-auto px-4 py-4 flex items-center justify-between\">\n",
    );
    html.push_str(&format!(
        "    <a href=\"{}\" class=\"text-2xl font-extrabold text-primary\">{site_name}</a>\n",
        Route::home().to_hash()
    ));
    html.push_str(&format!(
        "    <button id=\"lang-switcher\" data-language=\"{}\" class=\"font-bold text-dark-text hover:text-primary\">{}</button>\n",
        ctx.language.toggled().code(),
        html_escape(ctx.t(keys::SWITCH_LANGUAGE))
    ));
    html.push_str("  </nav>\n");
    html.push_str("</header>\n");
    html.push_str("<main id=\"app\">\n");
    html.push_str(&view.main);
    html.push_str("</main>\n");
    html.push_str(&format!(
        "<footer id=\"main-footer\" class=\"text-center text-gray-400 py-8\"{}>\n",
        hidden(view.chrome.footer)
    ));
    html.push_str(&format!(
        "  <p>&copy; {site_name}. {}</p>\n",
        html_escape(ctx.t(keys::RIGHTS_RESERVED))
    ));
    html.push_str("</footer>\n");
    html.push_str("</body>\n");
    html.push_str("</html>\n");
    html
}
