//! Alignment and scaling vocabularies consumed by [`Rectangle`](crate::Rectangle).
//!
//! Every mode parses from a case-insensitive keyword (`"fit"`, `"left"`,
//! `"keep_by_expanding"`, ...) and prints back its canonical keyword.
//!
//! ```
//! use zenrect::{AlignHorz, ScaleMode};
//!
//! let mode: ScaleMode = "Fill".parse().unwrap();
//! assert_eq!(mode, ScaleMode::Fill);
//! assert_eq!("right".parse::<AlignHorz>(), Ok(AlignHorz::Right));
//! ```

use core::fmt;
use core::str::FromStr;

/// How a rectangle is resized against a target in
/// [`scale_to_aspect`](crate::Rectangle::scale_to_aspect).
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AspectRatioMode {
    /// Take the target's width and height, distorting the aspect ratio.
    Ignore,
    /// Scale uniformly to fit completely within the target.
    #[default]
    Keep,
    /// Scale uniformly to completely enclose the target.
    KeepByExpanding,
    /// Like [`Keep`](Self::Keep), but never enlarges.
    /// Rectangles already inside the target bounds keep their size.
    KeepNoEnlarge,
}

/// Horizontal anchor: which x coordinate of a rectangle takes part in alignment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlignHorz {
    /// Skip horizontal alignment.
    Ignore,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Horizontal center.
    #[default]
    Center,
}

/// Vertical anchor: which y coordinate of a rectangle takes part in alignment.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlignVert {
    /// Skip vertical alignment.
    Ignore,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Vertical center.
    #[default]
    Center,
}

/// Named combination of an [`AspectRatioMode`] and centered anchors.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScaleMode {
    /// Center and scale to fit inside the target.
    #[default]
    Fit,
    /// Center and scale to completely enclose the target.
    Fill,
    /// Center on the target without changing size.
    Center,
    /// Match the target's position and dimensions.
    StretchToFill,
    /// Like [`Fit`](Self::Fit), but never enlarges.
    FitNoEnlarge,
}

impl ScaleMode {
    /// The aspect-ratio mode this scale mode resizes with.
    /// `None` for [`Center`](Self::Center), which only aligns.
    pub const fn aspect_ratio_mode(self) -> Option<AspectRatioMode> {
        match self {
            Self::Fit => Some(AspectRatioMode::Keep),
            Self::Fill => Some(AspectRatioMode::KeepByExpanding),
            Self::Center => None,
            Self::StretchToFill => Some(AspectRatioMode::Ignore),
            Self::FitNoEnlarge => Some(AspectRatioMode::KeepNoEnlarge),
        }
    }
}

/// Anchor set for aligning a rectangle against a target rectangle.
///
/// The `target_*` anchors pick the coordinate on the target, the `subject_*`
/// anchors pick the coordinate on the rectangle being moved. The constructors
/// encode the usual defaulting: missing anchors are [`Center`](AlignHorz::Center)
/// and missing subject anchors copy the target's.
///
/// ```
/// use zenrect::{AlignHorz, AlignVert, Anchors};
///
/// assert_eq!(Anchors::default(), Anchors::shared(AlignHorz::Center, AlignVert::Center));
/// assert_eq!(
///     Anchors::horz(AlignHorz::Left),
///     Anchors::new(AlignHorz::Left, AlignVert::Center, AlignHorz::Left, AlignVert::Center),
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Anchors {
    pub target_horz: AlignHorz,
    pub target_vert: AlignVert,
    pub subject_horz: AlignHorz,
    pub subject_vert: AlignVert,
}

impl Anchors {
    /// Center on both axes, for both rectangles.
    pub const CENTER: Self = Self::shared(AlignHorz::Center, AlignVert::Center);

    /// Fully explicit anchors.
    pub const fn new(
        target_horz: AlignHorz,
        target_vert: AlignVert,
        subject_horz: AlignHorz,
        subject_vert: AlignVert,
    ) -> Self {
        Self {
            target_horz,
            target_vert,
            subject_horz,
            subject_vert,
        }
    }

    /// The same anchor pair on the target and on the subject.
    pub const fn shared(horz: AlignHorz, vert: AlignVert) -> Self {
        Self::new(horz, vert, horz, vert)
    }

    /// Shared horizontal anchor, centered vertically.
    pub const fn horz(horz: AlignHorz) -> Self {
        Self::shared(horz, AlignVert::Center)
    }
}

impl Default for Anchors {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Keyword parse failure for one of the mode vocabularies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    /// The keyword is not part of the vocabulary.
    UnknownKeyword {
        /// Vocabulary name, e.g. `"scale mode"`.
        kind: &'static str,
        /// Accepted keywords, for diagnostics.
        expected: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKeyword { kind, expected } => {
                write!(f, "unrecognized {kind}, expected {expected}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// Case-insensitive keyword lookup that needs no allocation.
fn lookup<T: Copy>(s: &str, table: &[(&str, T)]) -> Option<T> {
    let s = s.trim();
    table
        .iter()
        .find(|(keyword, _)| keyword.eq_ignore_ascii_case(s))
        .map(|&(_, value)| value)
}

const ASPECT_RATIO_KEYWORDS: &[(&str, AspectRatioMode)] = &[
    ("ignore", AspectRatioMode::Ignore),
    ("keep", AspectRatioMode::Keep),
    ("keep_by_expanding", AspectRatioMode::KeepByExpanding),
    ("keepbyexpanding", AspectRatioMode::KeepByExpanding),
    ("expand", AspectRatioMode::KeepByExpanding),
    ("keep_no_enlarge", AspectRatioMode::KeepNoEnlarge),
    ("keepnoenlarge", AspectRatioMode::KeepNoEnlarge),
    ("no_enlarge", AspectRatioMode::KeepNoEnlarge),
];

const HORZ_KEYWORDS: &[(&str, AlignHorz)] = &[
    ("ignore", AlignHorz::Ignore),
    ("left", AlignHorz::Left),
    ("right", AlignHorz::Right),
    ("center", AlignHorz::Center),
    ("centre", AlignHorz::Center),
];

const VERT_KEYWORDS: &[(&str, AlignVert)] = &[
    ("ignore", AlignVert::Ignore),
    ("top", AlignVert::Top),
    ("bottom", AlignVert::Bottom),
    ("center", AlignVert::Center),
    ("centre", AlignVert::Center),
    ("middle", AlignVert::Center),
];

const SCALE_KEYWORDS: &[(&str, ScaleMode)] = &[
    ("fit", ScaleMode::Fit),
    ("fill", ScaleMode::Fill),
    ("center", ScaleMode::Center),
    ("centre", ScaleMode::Center),
    ("stretch", ScaleMode::StretchToFill),
    ("stretch_to_fill", ScaleMode::StretchToFill),
    ("stretchtofill", ScaleMode::StretchToFill),
    ("fit_no_enlarge", ScaleMode::FitNoEnlarge),
    ("fitnoenlarge", ScaleMode::FitNoEnlarge),
    ("within", ScaleMode::FitNoEnlarge),
];

impl FromStr for AspectRatioMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        lookup(s, ASPECT_RATIO_KEYWORDS).ok_or(ParseError::UnknownKeyword {
            kind: "aspect ratio mode",
            expected: "ignore|keep|keep_by_expanding|keep_no_enlarge",
        })
    }
}

impl FromStr for AlignHorz {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        lookup(s, HORZ_KEYWORDS).ok_or(ParseError::UnknownKeyword {
            kind: "horizontal anchor",
            expected: "ignore|left|right|center",
        })
    }
}

impl FromStr for AlignVert {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        lookup(s, VERT_KEYWORDS).ok_or(ParseError::UnknownKeyword {
            kind: "vertical anchor",
            expected: "ignore|top|bottom|center",
        })
    }
}

impl FromStr for ScaleMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        lookup(s, SCALE_KEYWORDS).ok_or(ParseError::UnknownKeyword {
            kind: "scale mode",
            expected: "fit|fill|center|stretch_to_fill|fit_no_enlarge",
        })
    }
}

impl fmt::Display for AspectRatioMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ignore => "ignore",
            Self::Keep => "keep",
            Self::KeepByExpanding => "keep_by_expanding",
            Self::KeepNoEnlarge => "keep_no_enlarge",
        })
    }
}

impl fmt::Display for AlignHorz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ignore => "ignore",
            Self::Left => "left",
            Self::Right => "right",
            Self::Center => "center",
        })
    }
}

impl fmt::Display for AlignVert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ignore => "ignore",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
        })
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fit => "fit",
            Self::Fill => "fill",
            Self::Center => "center",
            Self::StretchToFill => "stretch_to_fill",
            Self::FitNoEnlarge => "fit_no_enlarge",
        })
    }
}
