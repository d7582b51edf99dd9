use std::fmt;
use std::ops::Deref;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Located<T> {
    pub data: T,
    pub location: Option<Location>,
}

/// Offset into the whitespace-stripped input, counted in characters.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Location {
    pub pos: usize,
}

impl Location {
    pub fn at(pos: usize) -> Self {
        Location { pos }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pos)
    }
}

pub trait ToLocated {
    fn with_locate(self, location: Location) -> Located<Self>
    where
        Self: Sized,
    {
        Located::<Self> {
            data: self,
            location: Some(location),
        }
    }
}

impl<T> Located<T> {
    pub fn extract(self) -> T {
        self.data
    }

    pub fn position(&self) -> Option<usize> {
        self.location.map(|l| l.pos)
    }
}

impl<T> Deref for Located<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}
