use crate::model::series::Axis;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{axis} axis has {series} series but {legends} legend entries")]
    LegendMismatch {
        axis: Axis,
        series: usize,
        legends: usize,
    },
}
