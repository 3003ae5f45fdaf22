use core::fmt;


/// Error returned when an operation would push a [`StaticVec`](crate::StaticVec)
/// past its capacity.
///
/// The rejected element is handed back so nothing is lost; use
/// [`element`](CapacityError::element) to recover it.
#[derive(Clone, Copy, Eq, Ord, PartialEq, PartialOrd)]
pub struct CapacityError<T = ()> {
    element: T,
}

impl<T> CapacityError<T> {
    #[inline]
    pub const fn new(element: T) -> Self { Self { element } }

    /// Extracts the element that could not be stored.
    #[inline]
    pub fn element(self) -> T { self.element }

    /// Drops the carried element, keeping only the error.
    #[inline]
    pub fn simplify(self) -> CapacityError { CapacityError { element: () } }
}

impl<T> fmt::Display for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "insufficient capacity")
    }
}

impl<T> fmt::Debug for CapacityError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapacityError: {}", self)
    }
}

impl<T> core::error::Error for CapacityError<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let err = CapacityError::new(3);

        assert_eq!(err.to_string(), "insufficient capacity");
        assert_eq!(format!("{err:?}"), "CapacityError: insufficient capacity");
    }

    #[test]
    fn element() {
        let err = CapacityError::new("aa".to_string());
        assert_eq!(err.clone().element(), "aa");
        assert_eq!(err.simplify(), CapacityError::new(()));
    }

    #[test]
    fn is_core_error() {
        fn takes_error(e: &dyn core::error::Error) -> String { e.to_string() }
        assert!(takes_error(&CapacityError::new(1u8)).contains("capacity"));
    }
}
