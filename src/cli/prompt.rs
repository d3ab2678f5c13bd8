//! cli::prompt
//!
//! The one thing gitprompt does: read status, pick a format, print.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context as _, Result};

use crate::core::config::Config;
use crate::git;
use crate::render::render;

/// Inputs for a single prompt invocation.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Directory to report on (current directory if `None`)
    pub cwd: Option<PathBuf>,
    /// Value of `--format`
    pub format: Option<String>,
    /// Value of `$GITPROMPT_FORMAT`
    pub env_format: Option<String>,
    /// Wrap output for zsh
    pub zsh: bool,
}

/// Render the prompt for `ctx` into `out`.
///
/// Outside a repository nothing is written and the call succeeds.
pub fn prompt(ctx: &Context, config: &Config, out: &mut impl Write) -> Result<()> {
    let cwd = match &ctx.cwd {
        Some(path) => path.clone(),
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    let Some(status) = git::read_status(&cwd)
        .with_context(|| format!("failed to read git status in {}", cwd.display()))?
    else {
        return Ok(());
    };

    let format = config.resolve_format(ctx.format.as_deref(), ctx.env_format.as_deref());
    log::debug!("format: {:?}", format);

    let rendered = render(format, &status, ctx.zsh);
    out.write_all(rendered.as_bytes())
        .context("failed to write prompt")?;
    out.flush().context("failed to write prompt")?;

    Ok(())
}
