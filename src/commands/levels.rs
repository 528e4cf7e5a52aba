use anyhow::Result;

use strata::presentation::{render_levels, OutputFormat, SelectorArgs};
use strata::ui::widgets::multi_select::build_columns;

pub fn cmd_levels(args: &SelectorArgs, format: OutputFormat) -> Result<()> {
    let config = super::load_config();
    let manager = super::build_manager(args, &config)?;
    let columns = build_columns(&manager, &config.layout, false);
    print!("{}", render_levels(&columns, format)?);
    Ok(())
}
