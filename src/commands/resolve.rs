use anyhow::Result;

use strata::presentation::{render_state, OutputFormat, SelectorArgs};

pub fn cmd_resolve(args: &SelectorArgs, format: OutputFormat) -> Result<()> {
    let config = super::load_config();
    let manager = super::build_manager(args, &config)?;
    print!("{}", render_state(manager.state(), format)?);
    Ok(())
}
