use crate::catalog::Tool;
use crate::i18n::{format_number, keys};
use crate::ranking::RankedTool;
use crate::view::{FALLBACK_DESCRIPTION, PLACEHOLDER_LOGO, RenderContext, html_escape};

/// One ranked tool: rank badge, logo, name, description, rating, pricing and
/// a link to the tool's site.
pub fn render_tool_card(entry: &RankedTool<'_>, ctx: &RenderContext<'_>) -> String {
    let tool = entry.tool;
    let name = html_escape(tool.name.resolve(ctx.language));

    let mut html = String::new();
    html.push_str("    <div class=\"text-center\">\n");
    html.push_str(&format!(
        "      <h2 class=\"text-3xl font-bold text-secondary mb-4\">#{}</h2>\n",
        entry.rank
    ));
    html.push_str("      <div class=\"bg-dark-card rounded-2xl shadow-lg p-6 text-center\">\n");
    html.push_str("        <div class=\"flex items-center justify-center gap-4 mb-4\">\n");
    html.push_str(&format!(
        "          <div class=\"w-20 h-20 rounded-xl bg-slate-700 flex items-center justify-center p-2 flex-shrink-0\"><img loading=\"lazy\" alt=\"{}\" src=\"{}\" class=\"max-h-full max-w-full object-contain\" onerror=\"this.onerror=null;this.src='{}'\"/></div>\n",
        name,
        html_escape(logo_url(tool)),
        PLACEHOLDER_LOGO
    ));
    html.push_str(&format!(
        "          <h3 class=\"text-2xl font-bold text-dark-text text-start flex-grow\">{name}</h3>\n"
    ));
    html.push_str("        </div>\n");
    html.push_str(&format!(
        "        <p class=\"text-gray-400 text-base leading-relaxed my-4 mx-auto max-w-md\">{}</p>\n",
        html_escape(short_description(tool, ctx))
    ));
    html.push_str(
        "        <div class=\"flex items-center justify-center gap-2 text-dark-text text-lg my-4\">\n",
    );
    html.push_str("          <i class=\"fas fa-star text-yellow-400\"></i>\n");
    html.push_str(&format!(
        "          <span class=\"font-bold\">{}</span>\n",
        tool.rating
    ));
    html.push_str(&format!(
        "          <span class=\"text-gray-400 text-base\">{}</span>\n",
        html_escape(&format_number(tool.review_count, ctx.language))
    ));
    html.push_str("        </div>\n");
    html.push_str(&format!(
        "        <div class=\"text-base text-gray-300 my-4\"><strong class=\"font-bold\">{}:</strong> {}</div>\n",
        html_escape(ctx.t(keys::PRICING)),
        html_escape(tool.pricing.resolve(ctx.language))
    ));
    html.push_str(&format!(
        "        <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"mt-4 w-full text-center bg-primary text-white font-bold py-3 px-4 rounded-lg hover:bg-violet-700 transition-colors flex items-center justify-center gap-2 text-lg\">{} <i class=\"fas fa-external-link-alt\"></i></a>\n",
        html_escape(&tool.website),
        html_escape(ctx.t(keys::VISIT_SITE))
    ));
    html.push_str("      </div>\n");
    html.push_str("    </div>\n");
    html
}

/// The tool's own description, else its category name, else a generic label.
pub(crate) fn short_description<'a>(tool: &'a Tool, ctx: &RenderContext<'a>) -> &'a str {
    tool.short_description
        .as_ref()
        .and_then(|text| text.get(ctx.language))
        .or_else(|| {
            ctx.catalog
                .category(&tool.category)
                .and_then(|category| category.name.get(ctx.language))
        })
        .unwrap_or(FALLBACK_DESCRIPTION)
}

fn logo_url(tool: &Tool) -> &str {
    if tool.logo.trim().is_empty() {
        PLACEHOLDER_LOGO
    } else {
        &tool.logo
    }
}
