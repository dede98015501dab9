mod elements;
mod input;
mod plot;

use elements::run_elements;
use input::run_input;
use plot::run_plot;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Elements(args) => run_elements(args, ctx),
        Command::Plot(args) => run_plot(args, ctx),
        Command::Input(args) => run_input(args, ctx),
    }
}
