//! `name=value` command line options.
//!
//! Arguments are matched against a map of option parsers by name. Anything
//! that isn't `name=value`, or whose name nobody registered, is skipped
//! without a word; parsing the value is up to the registered parser.

use std::collections::HashMap;
use std::str::FromStr;

/// A parser of an option value.
pub type OptionParser<'a> = Box<dyn FnMut(&str) + 'a>;

/// Option parsers indexed by their option name.
pub type OptionParserMap<'a> = HashMap<&'a str, OptionParser<'a>>;

/// Iterates over `arguments` and hands the value of each `name=value`
/// argument to the parser registered under `name`. The argument is split at
/// the first `=`, so the value may contain more of them.
pub fn parse_options<I, S>(arguments: I, parsers: &mut OptionParserMap<'_>)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for argument in arguments {
        let Some((name, value)) = argument.as_ref().split_once('=') else {
            continue;
        };
        if let Some(parser) = parsers.get_mut(name) {
            parser(value);
        }
    }
}

/// Returns a parser which stores the parsed value into `target`, leaving it
/// as it was if the value doesn't parse.
pub fn store<'a, T: FromStr>(name: &'a str, target: &'a mut T) -> OptionParser<'a> {
    Box::new(move |value: &str| match value.parse() {
        Ok(parsed) => *target = parsed,
        Err(_) => log::debug!("ignoring unparseable value {value:?} for option {name}"),
    })
}

/// The initial window extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayOptions {
    fn default() -> DisplayOptions {
        DisplayOptions {
            width: 1024,
            height: 512,
        }
    }
}

impl DisplayOptions {
    /// Reads `width=<int>` and `height=<int>` out of `arguments`, falling back
    /// to the defaults for anything missing or malformed.
    pub fn from_args<I, S>(arguments: I) -> DisplayOptions
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = DisplayOptions::default();
        let DisplayOptions { width, height } = &mut options;
        let mut parsers = OptionParserMap::new();
        parsers.insert("width", store("width", width));
        parsers.insert("height", store("height", height));
        parse_options(arguments, &mut parsers);
        drop(parsers);
        options
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    fn recording<'a>(log: &'a RefCell<Vec<String>>, name: &'a str) -> OptionParser<'a> {
        Box::new(move |value: &str| log.borrow_mut().push(format!("{name}:{value}")))
    }

    #[test]
    fn registered_options_receive_their_value() {
        let log = RefCell::new(Vec::new());
        let mut parsers = OptionParserMap::new();
        parsers.insert("width", recording(&log, "width"));
        parsers.insert("title", recording(&log, "title"));
        parse_options(["width=800", "title=A Game", "width="], &mut parsers);
        drop(parsers);
        assert_eq!(vec!["width:800", "title:A Game", "width:"], log.into_inner());
    }

    #[test]
    fn value_is_everything_after_the_first_separator() {
        let log = RefCell::new(Vec::new());
        let mut parsers = OptionParserMap::new();
        parsers.insert("define", recording(&log, "define"));
        parse_options(["define=a=b"], &mut parsers);
        drop(parsers);
        assert_eq!(vec!["define:a=b"], log.into_inner());
    }

    #[test]
    fn unmatched_arguments_are_skipped() {
        let log = RefCell::new(Vec::new());
        let mut parsers = OptionParserMap::new();
        parsers.insert("width", recording(&log, "width"));
        parse_options(
            ["foo", "width", "height=600", "Width=1", " width=2", "=800", ""],
            &mut parsers,
        );
        drop(parsers);
        assert!(log.into_inner().is_empty());
    }

    #[test]
    fn display_options_read_width_and_height() {
        let options = DisplayOptions::from_args(["width=800", "height=600"]);
        assert_eq!(
            DisplayOptions {
                width: 800,
                height: 600
            },
            options
        );
    }

    #[test]
    fn display_options_default_without_matching_arguments() {
        let options = DisplayOptions::from_args(["./arete-gl", "fullscreen", "depth=24"]);
        assert_eq!(DisplayOptions::default(), options);
        assert_eq!((1024, 512), (options.width, options.height));
    }

    #[test]
    fn malformed_values_keep_the_previous_value() {
        let options = DisplayOptions::from_args(["width=abc", "height=-5"]);
        assert_eq!(DisplayOptions::default(), options);

        let options = DisplayOptions::from_args(["width=640", "width=abc"]);
        assert_eq!(640, options.width);
    }

    #[test]
    fn later_arguments_win() {
        let options = DisplayOptions::from_args(["height=100", "height=200"]);
        assert_eq!(200, options.height);
    }

    #[test]
    fn works_with_owned_arguments() {
        let arguments = vec![String::from("width=1920"), String::from("height=1080")];
        let options = DisplayOptions::from_args(arguments);
        assert_eq!((1920, 1080), (options.width, options.height));
    }
}
