use anyhow::{bail, Result};

use strata::config::ColorMode;
use strata::error::StrataError;
use strata::popover::Popover;
use strata::presentation::{render_state, OutputFormat, SelectorArgs};
use strata::ui::terminal::detect_capabilities;
use strata::ui::theme::{Glyphs, StrataTheme};
use strata::ui::widgets::multi_select::{run_interactive, run_prompt, RenderOptions};
use strata::ui::widgets::MultiSelect;

pub fn cmd_pick(
    args: &SelectorArgs,
    prompt: bool,
    format: OutputFormat,
    color: Option<ColorMode>,
) -> Result<()> {
    let config = super::load_config();
    let caps = detect_capabilities()
        .with_color_mode(color.unwrap_or(config.output.color))
        .with_unicode(config.output.unicode);
    if !caps.is_interactive() {
        bail!("`strata pick` needs an interactive terminal; use `strata resolve` instead");
    }

    let manager = super::build_manager(args, &config)?.on_change(|state, level| {
        tracing::info!(level, path = ?state.path_ids(), "selection changed");
    });
    let title = args
        .tree
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "strata".to_string());

    let state = if prompt {
        let mut manager = manager;
        run_prompt(&mut manager, &StrataTheme::new(caps.supports_unicode), &title)?;
        manager.into_state()
    } else {
        let popover = Popover::new().on_open_change(|open| tracing::debug!(open, "picker popover"));
        let mut select = MultiSelect::with_popover(manager, popover).with_layout(config.layout);
        let opts = RenderOptions {
            glyphs: Glyphs::new(caps.supports_unicode),
            color: caps.supports_color,
            scroll_height: config.layout.scroll_height,
        };
        if !run_interactive(&mut select, &title, &opts)? {
            return Err(StrataError::Cancelled.into());
        }
        select.into_state()
    };

    print!("{}", render_state(&state, format)?);
    Ok(())
}
