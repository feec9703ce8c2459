use darts_core::{DartSource, Observer, Region};

use super::{Action, Darts, Estimate, Event, Status};

/// Throws up to `n` darts and tallies where they land.
///
/// Source errors are returned unboxed so infallible sources stay infallible.
pub(super) fn throw_darts<S, Obs>(
    n: i64,
    mut source: S,
    mut observer: Obs,
) -> Result<Estimate, S::Error>
where
    S: DartSource,
    Obs: Observer<Event, Action>,
{
    let trials = match u64::try_from(n) {
        Ok(trials) if trials > 0 => trials,
        _ => return Ok(Estimate::empty()),
    };

    tracing::debug!(trials, "throwing darts");

    let mut inside = Darts::default();
    let mut outside = Darts::default();
    let mut inside_count = 0_u64;

    for trial in 1..=trials {
        let dart = source.throw()?;
        let region = dart.region();

        match region {
            Region::Inside => {
                inside_count += 1;
                inside.push(dart);
            }
            Region::Outside => outside.push(dart),
        }

        let event = Event {
            trial,
            dart,
            region,
            inside_count,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            tracing::debug!(trial, "stopped by observer");
            return Ok(finish(
                Status::StoppedByObserver,
                trial,
                inside_count,
                inside,
                outside,
            ));
        }
    }

    Ok(finish(
        Status::Complete,
        trials,
        inside_count,
        inside,
        outside,
    ))
}

#[allow(clippy::cast_precision_loss)]
fn finish(
    status: Status,
    trials: u64,
    inside_count: u64,
    inside: Darts,
    outside: Darts,
) -> Estimate {
    let pi = 4.0 * (inside_count as f64 / trials as f64);

    tracing::debug!(trials, inside_count, pi, ?status, "estimate complete");

    Estimate {
        status,
        pi,
        trials,
        inside,
        outside,
    }
}
