//! Implementation of the `toolhub lang` command.

use std::str::FromStr;

use clap::Args;
use toolhub::i18n::UnsupportedLanguage;
use toolhub::Language;

use crate::output::{self, CliError};
use crate::settings::Globals;

/// Arguments for the lang command.
#[derive(Debug, Args)]
pub struct LangArgs {
    /// `en`, `ar` or `toggle`; omit to print the current language
    pub target: Option<LangTarget>,
}

/// What to do with the stored language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LangTarget {
    Set(Language),
    Toggle,
}

impl FromStr for LangTarget {
    type Err = UnsupportedLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("toggle") {
            Ok(LangTarget::Toggle)
        } else {
            s.parse().map(LangTarget::Set)
        }
    }
}

/// Run the lang command.
pub fn run_lang(globals: &Globals, args: LangArgs) -> miette::Result<i32> {
    let Some(target) = args.target else {
        let language = globals.language();
        println!("{language} ({})", language.direction().as_str());
        return Ok(exitcode::OK);
    };

    let mut app = globals.app("")?;
    let rendered = match target {
        LangTarget::Toggle => app.toggle_language(),
        LangTarget::Set(language) => app.set_language(language),
    }
    .map_err(CliError::from)?;

    output::success(format_args!(
        "language set to {} ({}) in {}",
        rendered.language,
        rendered.language.direction().as_str(),
        globals.prefs.display()
    ));
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_languages_and_toggle() {
        assert_eq!("toggle".parse::<LangTarget>().unwrap(), LangTarget::Toggle);
        assert_eq!(
            "ar".parse::<LangTarget>().unwrap(),
            LangTarget::Set(Language::Ar)
        );
        assert!("fr".parse::<LangTarget>().is_err());
    }
}
