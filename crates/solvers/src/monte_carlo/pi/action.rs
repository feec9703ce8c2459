/// Control actions supported by the π estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop throwing and estimate from the darts thrown so far.
    StopEarly,
}
