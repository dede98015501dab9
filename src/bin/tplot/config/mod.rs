mod input;
mod plot;

pub use input::{SolverInput, build_solver_input, load_input_request, resolve_mode};
pub use plot::{PlotPlan, PlotRequest, build_plot_plan, load_plot_request};
