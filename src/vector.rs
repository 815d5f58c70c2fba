use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_traits::{One, Zero};

use crate::angle::{convert, AngleUnit, Radians};
use crate::error::{GeometryError, ParseError, Result};
use crate::TOLERANCE;

/// A displacement in the 2D Euclidean plane.
///
/// `Vector2D` is a vector-space value: it has a zero, componentwise
/// addition and negation, and scalar multiplication. It is a distinct
/// nominal type from [`Point2D`](crate::point::Point2D); a displacement
/// never converts into a location (or back) except through the named
/// affine operations on points.
///
/// Equality, hashing, and the derived lexicographic `(x, y)` ordering exist
/// for deterministic collections and tests. The ordering carries no
/// geometric meaning; do not read it as a statement about magnitude or
/// angle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vector2D<S> {
    x: S,
    y: S,
}

/// The two coordinate axes of the plane, used as the basis in
/// [`Vector2D::decompose`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Basis2 {
    X,
    Y,
}

impl Basis2 {
    /// The unit vector along this axis.
    #[must_use]
    pub fn unit<S: Zero + One>(self) -> Vector2D<S> {
        match self {
            Basis2::X => Vector2D::new(S::one(), S::zero()),
            Basis2::Y => Vector2D::new(S::zero(), S::one()),
        }
    }
}

impl<S> Vector2D<S> {
    /// Creates a vector from its two components.
    #[must_use]
    pub const fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// Destructures the vector into its `(x, y)` component pair.
    #[must_use]
    pub fn to_pair(self) -> (S, S) {
        (self.x, self.y)
    }

    /// Returns the x component.
    #[inline]
    #[must_use]
    pub fn x(self) -> S
    where
        S: Copy,
    {
        self.x
    }

    /// Returns the y component.
    #[inline]
    #[must_use]
    pub fn y(self) -> S
    where
        S: Copy,
    {
        self.y
    }

    /// The additive identity `(0, 0)`.
    #[must_use]
    pub fn zero() -> Self
    where
        S: Zero,
    {
        Self::new(S::zero(), S::zero())
    }

    /// Multiplies both components by the scalar `s`.
    #[must_use]
    pub fn scale(self, s: S) -> Self
    where
        S: Copy + Mul<Output = S>,
    {
        Self::new(self.x * s, self.y * s)
    }

    /// Inner product `x1 * x2 + y1 * y2`.
    ///
    /// The scalar's own inner product is taken to be ordinary
    /// multiplication, which covers every scalar this crate instantiates;
    /// vectors-of-vectors are out of scope.
    #[must_use]
    pub fn dot(self, other: Self) -> S
    where
        S: Mul<Output = S> + Add<Output = S>,
    {
        self.x * other.x + self.y * other.y
    }

    /// Coordinates of the vector against the two-axis basis.
    ///
    /// This is the concrete 2D instance of a coordinate-decomposition
    /// protocol that is N-dimensional in consuming systems; only the
    /// two-level decomposition terminating in the scalar coordinates is
    /// supported here.
    #[must_use]
    pub fn decompose(self) -> [(Basis2, S); 2] {
        [(Basis2::X, self.x), (Basis2::Y, self.y)]
    }

    /// The coordinate along a single basis axis.
    #[must_use]
    pub fn component(self, basis: Basis2) -> S {
        match basis {
            Basis2::X => self.x,
            Basis2::Y => self.y,
        }
    }
}

impl Vector2D<f64> {
    /// The unit vector along the positive x axis.
    #[must_use]
    pub const fn unit_x() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The unit vector along the positive y axis.
    #[must_use]
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0)
    }

    /// Euclidean length of the vector.
    #[must_use]
    pub fn length(self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared Euclidean length, avoiding the square root.
    #[must_use]
    pub fn length_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scales the vector to unit length.
    ///
    /// # Errors
    ///
    /// Returns an error if the length is below [`TOLERANCE`].
    pub fn normalize(self) -> Result<Self> {
        let len = self.length();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(Self::new(self.x / len, self.y / len))
    }

    /// The counter-clockwise perpendicular `(-y, x)`.
    #[must_use]
    pub fn perp(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// The angle of the vector, measured counter-clockwise from the
    /// positive x axis.
    #[must_use]
    pub fn direction<A: AngleUnit>(self) -> A {
        convert(Radians::new(self.y.atan2(self.x)))
    }

    /// The unit vector pointing along `angle`.
    #[must_use]
    pub fn from_direction<A: AngleUnit>(angle: A) -> Self {
        let (sin, cos) = convert::<A, Radians>(angle).get().sin_cos();
        Self::new(cos, sin)
    }
}

impl<S: Add<Output = S>> Add for Vector2D<S> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<S: Sub<Output = S>> Sub for Vector2D<S> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<S: Neg<Output = S>> Neg for Vector2D<S> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<S: Copy + Mul<Output = S>> Mul<S> for Vector2D<S> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: S) -> Self {
        self.scale(rhs)
    }
}

impl Mul<Vector2D<f64>> for f64 {
    type Output = Vector2D<f64>;

    #[inline]
    fn mul(self, rhs: Vector2D<f64>) -> Vector2D<f64> {
        rhs.scale(self)
    }
}

impl<S: Zero> Zero for Vector2D<S> {
    fn zero() -> Self {
        Self::new(S::zero(), S::zero())
    }

    fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

impl<S> From<(S, S)> for Vector2D<S> {
    fn from((x, y): (S, S)) -> Self {
        Self::new(x, y)
    }
}

impl<S> From<Vector2D<S>> for (S, S) {
    fn from(v: Vector2D<S>) -> Self {
        v.to_pair()
    }
}

impl From<Vector2D<f64>> for nalgebra::Vector2<f64> {
    fn from(v: Vector2D<f64>) -> Self {
        nalgebra::Vector2::new(v.x, v.y)
    }
}

impl From<nalgebra::Vector2<f64>> for Vector2D<f64> {
    fn from(v: nalgebra::Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

/// Renders the pair as `x & y`, each component in the scalar's own
/// formatting with negative components parenthesized. The alternate form
/// (`{:#}`) parenthesizes the whole pair, for embedding inside a larger
/// expression.
impl<S: fmt::Display> fmt::Display for Vector2D<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = paren_if_negative(format!("{:#}", self.x));
        let y = paren_if_negative(format!("{:#}", self.y));
        if f.alternate() {
            write!(f, "({x} & {y})")
        } else {
            write!(f, "{x} & {y}")
        }
    }
}

fn paren_if_negative(rendered: String) -> String {
    if rendered.starts_with('-') {
        format!("({rendered})")
    } else {
        rendered
    }
}

/// Parses exactly the `x & y` grammar produced by `Display`: a pair of
/// scalar components separated by `&`, either component optionally
/// parenthesized, the whole pair optionally parenthesized, whitespace
/// allowed around tokens. Anything else is a non-match.
impl<S: FromStr> FromStr for Vector2D<S> {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        check_balanced(trimmed)?;
        let body = strip_outer_parens(trimmed).trim();
        let (left, right) = split_top_level(body)
            .ok_or_else(|| ParseError::MissingSeparator(trimmed.to_string()))?;
        Ok(Self::new(parse_component(left)?, parse_component(right)?))
    }
}

fn check_balanced(s: &str) -> std::result::Result<(), ParseError> {
    let mut depth = 0_i32;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return Err(ParseError::UnbalancedParens(s.to_string()));
                }
            }
            _ => {}
        }
    }
    if depth == 0 {
        Ok(())
    } else {
        Err(ParseError::UnbalancedParens(s.to_string()))
    }
}

/// Strips one pair of parentheses if they wrap the entire string.
fn strip_outer_parens(s: &str) -> &str {
    if !(s.starts_with('(') && s.ends_with(')')) {
        return s;
    }
    let mut depth = 0_i32;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    // The opening paren must close at the final character,
                    // otherwise it wraps only a prefix (e.g. `(-3.0) & 4.0`).
                    if i + c.len_utf8() == s.len() {
                        return &s[1..s.len() - 1];
                    }
                    return s;
                }
            }
            _ => {}
        }
    }
    s
}

/// Splits at the first `&` outside any parentheses.
fn split_top_level(s: &str) -> Option<(&str, &str)> {
    let mut depth = 0_i32;
    for (i, c) in s.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            '&' if depth == 0 => return Some((&s[..i], &s[i + 1..])),
            _ => {}
        }
    }
    None
}

fn parse_component<S: FromStr>(s: &str) -> std::result::Result<S, ParseError> {
    let trimmed = s.trim();
    let body = strip_outer_parens(trimmed).trim();
    body.parse()
        .map_err(|_| ParseError::InvalidComponent(trimmed.to_string()))
}
