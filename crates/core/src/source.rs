use crate::Dart;

/// Produces darts for an estimator.
///
/// Random sources never fail and use [`std::convert::Infallible`] as their
/// error. Finite sources (e.g. a replayed sequence) return an error once
/// they run out.
pub trait DartSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Throws the next dart.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot produce another dart.
    fn throw(&mut self) -> Result<Dart, Self::Error>;
}

/// Allows a source to be lent to an estimator and inspected afterwards.
impl<S: DartSource + ?Sized> DartSource for &mut S {
    type Error = S::Error;

    fn throw(&mut self) -> Result<Dart, Self::Error> {
        (**self).throw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// Walks along the x-axis in steps of 0.5.
    struct Walk(f64);

    impl DartSource for Walk {
        type Error = Infallible;

        fn throw(&mut self) -> Result<Dart, Infallible> {
            self.0 += 0.5;
            Ok(Dart::new(self.0, 0.0))
        }
    }

    fn throw_twice<S: DartSource>(mut source: S) -> [Dart; 2] {
        let first = source.throw().unwrap();
        let second = source.throw().unwrap();
        [first, second]
    }

    #[test]
    fn borrowed_source_advances_owner() {
        let mut walk = Walk(0.0);
        let darts = throw_twice(&mut walk);

        assert_eq!(darts, [Dart::new(0.5, 0.0), Dart::new(1.0, 0.0)]);
        assert_eq!(walk.throw().ok(), Some(Dart::new(1.5, 0.0)));
    }
}
