/// Marker for a model that is **not yet trained**.
///
/// Only `LinearModel<Unfitted>` implements [`TrainableModel`](super::TrainableModel),
/// and it has no `predict`: an untrained model cannot be used for inference.
#[derive(Debug, Clone, Copy)]
pub struct Unfitted;

/// Marker for a model whose parameters are final and expressed in original units.
///
/// A `Fitted` model carries no training hyperparameters, normalization bounds or
/// loss history, only the two coefficients needed to predict.
#[derive(Debug, Clone, Copy)]
pub struct Fitted;
