//! Resolution of flat option lists.
//!
//! A list looks like `[target] low high [keyword [value]]...`, e.g.
//! `-1 2 level 20 colorP 0.6,0.4,0.3 log`.  Keywords are matched
//! case-insensitively; see [`resolve`] for the vocabulary.

use std::collections::HashMap;
use std::fmt;
use lazy_static::lazy_static;
use crate::color;
use crate::error::{Error, Result};
use crate::legend::{self, Outcome, Outputs, Surface};
use crate::options::{Config, Options, MAX_LEVELS};
use crate::ramp::{ColorRamp, Spacing};

/// One token of an option list.
#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    Num(f64),
    /// A row of numbers, such as a color.
    Array(Vec<f64>),
    Str(String),
    /// A word as written on a command line, read as a number, a row or
    /// a string depending on where it appears.
    Word(String),
}

impl Arg {
    /// Interpret a command-line word: a number, a comma-separated row
    /// of numbers, or else a string.
    pub fn parse(s: &str) -> Arg {
        if let Ok(x) = s.trim().parse::<f64>() {
            return Arg::Num(x)
        }
        if s.contains(',') {
            let row: std::result::Result<Vec<f64>, _> = s.split(',')
                .map(|x| x.trim().parse::<f64>()).collect();
            if let Ok(row) = row {
                return Arg::Array(row)
            }
        }
        Arg::Str(s.to_string())
    }

    /// The token as a number, a row or a string.
    fn classify(&self) -> Arg {
        match self {
            Arg::Word(s) => Arg::parse(s),
            a => a.clone(),
        }
    }

    /// Text of the token; words are kept as written.
    fn text(&self) -> String {
        match self {
            Arg::Str(s) | Arg::Word(s) => s.clone(),
            Arg::Num(x) => x.to_string(),
            Arg::Array(v) => {
                let v: Vec<String> = v.iter().map(|x| x.to_string()).collect();
                v.join(",")
            }
        }
    }
}

impl From<f64> for Arg {
    fn from(x: f64) -> Self { Arg::Num(x) }
}

impl From<[f64; 3]> for Arg {
    fn from(c: [f64; 3]) -> Self { Arg::Array(c.to_vec()) }
}

impl From<Vec<f64>> for Arg {
    fn from(v: Vec<f64>) -> Self { Arg::Array(v) }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self { Arg::Str(s.to_string()) }
}

impl From<String> for Arg {
    fn from(s: String) -> Self { Arg::Str(s) }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Num(x) => write!(f, "{x}"),
            Arg::Array(v) => {
                let v: Vec<String> = v.iter().map(|x| x.to_string()).collect();
                write!(f, "[{}]", v.join(", "))
            }
            Arg::Str(s) | Arg::Word(s) => write!(f, "“{s}”"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Keyword {
    Level,
    Label,
    ColorP,
    ColorN,
    ColorW,
    Log,
    Full,
    Rev,
    Off,
}

lazy_static! {
    static ref KEYWORDS: HashMap<&'static str, Keyword> = {
        use Keyword::*;
        [("level", Level), ("label", Label), ("colorp", ColorP),
         ("colorn", ColorN), ("colorw", ColorW), ("log", Log),
         ("full", Full), ("rev", Rev), ("off", Off)]
            .into_iter().collect()
    };
}

impl Keyword {
    fn find(s: &str) -> Option<Keyword> {
        KEYWORDS.get(s.to_ascii_lowercase().as_str()).copied()
    }

    fn name(self) -> &'static str {
        use Keyword::*;
        match self {
            Level => "level",
            Label => "label",
            ColorP => "colorP",
            ColorN => "colorN",
            ColorW => "colorW",
            Log => "log",
            Full => "full",
            Rev => "rev",
            Off => "off",
        }
    }
}

/// A resolved option list.
#[derive(Clone, Debug)]
pub struct Invocation {
    /// Leading non-numeric token, naming the surface to draw on.
    pub target: Option<String>,
    pub low: f64,
    pub high: f64,
    pub options: Options,
}

impl Invocation {
    /// Validate the options against the range.
    pub fn config(&self) -> Result<Config> {
        self.options.resolve(self.low, self.high)
    }

    /// Build the ramp.
    pub fn build(&self) -> Result<ColorRamp> {
        Ok(ColorRamp::new(&self.config()?))
    }

    /// Build the ramp and apply it to `surface` (see [`legend::apply`]).
    pub fn apply<S>(&self, surface: Option<&mut S>, outputs: Outputs)
                    -> Result<Outcome>
    where S: Surface + ?Sized {
        legend::apply(surface, &self.config()?, outputs)
    }
}

/// Resolve an option list.
///
/// | keyword  | value                                   |
/// |----------|-----------------------------------------|
/// | `level`  | integer in `1 ..= MAX_LEVELS`           |
/// | `label`  | any token, kept as text (may be a keyword) |
/// | `colorP` | 3-element color                         |
/// | `colorN` | 3-element color                         |
/// | `colorW` | 3-element color                         |
/// | `log`    | optional non-zero number (default 1)    |
/// | `full`   | optional number strictly inside range   |
/// | `rev`    | none                                    |
/// | `off`    | none                                    |
///
/// # Example
///
/// ```
/// use pwn_colormap::args::{resolve, Arg};
/// let inv = resolve(&[Arg::from(-1.), 2.0.into(), "level".into(), 20.0.into(),
///                     "colorP".into(), [0.6, 0.4, 0.3].into()])?;
/// assert_eq!(inv.build()?.len(), 29);
/// # Ok::<(), pwn_colormap::Error>(())
/// ```
pub fn resolve(tokens: &[Arg]) -> Result<Invocation> {
    let classified: Vec<Arg> = tokens.iter().map(Arg::classify).collect();
    let mut args = classified.iter().enumerate().peekable();
    let target = match args.peek().map(|&(_, a)| a) {
        Some(Arg::Str(s)) => {
            args.next();
            Some(s.clone())
        }
        _ => None,
    };
    let mut bound = || match args.next() {
        Some((_, Arg::Num(x))) => Ok(*x),
        Some((_, a)) => Err(Error::Bounds(a.to_string())),
        None => Err(Error::Bounds("nothing".to_string())),
    };
    let low = bound()?;
    let high = bound()?;

    let mut options = Options::new();
    let mut seen = Vec::new();
    while let Some((position, arg)) = args.next() {
        let kw = match arg {
            Arg::Str(s) => Keyword::find(s)
                .ok_or_else(|| Error::UnknownOption(s.clone()))?,
            a => return Err(Error::Ambiguous { value: a.to_string(),
                                               position }),
        };
        if seen.contains(&kw) {
            return Err(Error::Duplicate(kw.name()))
        }
        seen.push(kw);
        let option = kw.name();
        options = match kw {
            Keyword::Level => match args.next() {
                Some((_, &Arg::Num(x))) => {
                    if !(x > 0.) || x.fract() != 0. || x > MAX_LEVELS as f64 {
                        return Err(Error::Level(x))
                    }
                    options.level(x as usize)
                }
                Some((_, a)) => return Err(Error::invalid_value(
                    option, "a positive integer", a.to_string())),
                None => return Err(Error::MissingValue(option)),
            },
            Keyword::Label => match args.next() {
                Some((i, _)) => options.label(tokens[i].text()),
                None => return Err(Error::MissingValue(option)),
            },
            Keyword::ColorP | Keyword::ColorN | Keyword::ColorW => {
                let c = match args.next() {
                    Some((_, Arg::Array(v))) => color::from_slice(option, v)?,
                    Some((_, &Arg::Num(x))) => color::from_slice(option, &[x])?,
                    Some((_, a)) => return Err(Error::invalid_value(
                        option, "a color [r, g, b]", a.to_string())),
                    None => return Err(Error::MissingValue(option)),
                };
                match kw {
                    Keyword::ColorP => options.positive(c),
                    Keyword::ColorN => options.negative(c),
                    _ => options.white(c),
                }
            }
            Keyword::Log => match args.peek().map(|&(_, a)| a) {
                Some(&Arg::Num(f)) => {
                    args.next();
                    if !Spacing::valid_factor(f) {
                        return Err(Error::LogFactor(f))
                    }
                    options.log_factor(f)
                }
                _ => options.log(),
            },
            Keyword::Full => match args.peek().map(|&(_, a)| a) {
                Some(&Arg::Num(x)) => {
                    args.next();
                    options.full_at(x)
                }
                _ => options.full(),
            },
            Keyword::Rev => options.reverse(),
            Keyword::Off => options.off(),
        };
    }
    Ok(Invocation { target, low, high, options })
}
