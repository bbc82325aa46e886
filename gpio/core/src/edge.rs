//! Edge trigger selection

/// Signal transition on a pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Low to high
    Rising,
    /// High to low
    Falling,
}

/// Which transitions latch the pending flag of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeSensitivity {
    pub rising: bool,
    pub falling: bool,
}

impl EdgeSensitivity {
    pub const NONE: Self = Self::new(false, false);
    pub const RISING: Self = Self::new(true, false);
    pub const FALLING: Self = Self::new(false, true);
    pub const BOTH: Self = Self::new(true, true);

    pub const fn new(rising: bool, falling: bool) -> Self {
        Self { rising, falling }
    }

    /// Whether an edge of the given kind triggers the line
    pub const fn triggers_on(self, edge: Edge) -> bool {
        match edge {
            Edge::Rising => self.rising,
            Edge::Falling => self.falling,
        }
    }
}

impl From<Edge> for EdgeSensitivity {
    fn from(edge: Edge) -> Self {
        match edge {
            Edge::Rising => Self::RISING,
            Edge::Falling => Self::FALLING,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for EdgeSensitivity {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "Edges{{rising: {}, falling: {}}}", self.rising, self.falling);
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Edge {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Edge::Rising => defmt::write!(fmt, "Rising"),
            Edge::Falling => defmt::write!(fmt, "Falling"),
        }
    }
}
