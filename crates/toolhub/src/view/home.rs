use crate::i18n::keys;
use crate::router::Route;
use crate::view::{RenderContext, html_escape};

/// Full-screen hero with a single call to action leading to the categories.
pub fn render_home(ctx: &RenderContext<'_>) -> String {
    let mut html = String::new();
    html.push_str("<div class=\"page hero-background\">\n");
    html.push_str(
        "  <div class=\"flex flex-col items-center justify-center min-h-screen text-center text-white p-4 relative z-10 bg-black/50\">\n",
    );
    html.push_str(
        "    <div class=\"w-24 h-24 bg-primary rounded-3xl flex items-center justify-center mb-6 shadow-lg\"><i class=\"fa-solid fa-bolt text-white text-5xl\"></i></div>\n",
    );
    html.push_str(&format!(
        "    <h1 class=\"text-5xl md:text-7xl font-extrabold\">{}</h1>\n",
        html_escape(ctx.t(keys::SITE_NAME))
    ));
    html.push_str(&format!(
        "    <h2 class=\"text-2xl md:text-4xl font-bold text-primary mt-2\">{}</h2>\n",
        html_escape(ctx.t(keys::DISCOVER))
    ));
    html.push_str(&format!(
        "    <p class=\"max-w-3xl mx-auto mt-6 text-lg text-gray-300\">{}</p>\n",
        html_escape(ctx.t(keys::HERO_SUBTITLE))
    ));
    html.push_str(&format!(
        "    <a id=\"search-btn\" href=\"{}\" class=\"mt-12 bg-primary text-white font-bold py-4 px-10 rounded-full text-xl hover:bg-violet-700 transition-all duration-300 shadow-lg transform hover:scale-105\"><i class=\"fas fa-search mr-2\"></i> {}</a>\n",
        Route::categories().to_hash(),
        html_escape(ctx.t(keys::SEARCH_AI_TOOLS))
    ));
    html.push_str("  </div>\n");
    html.push_str("</div>\n");
    html
}
