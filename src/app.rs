use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::{Config, default_archive_list, default_rename_list};
use crate::consts::DEFAULT_ARCHIVE_PREFIX;
use crate::core::{Organizer, OrganizerLists, OrganizerOptions};
use crate::error::AppError;
use crate::files::OsFileSystem;
use crate::output::{output_lists_json, output_report_json, print_lists, print_summary};
use crate::utils::{Clock, FixedClock, SystemClock, Timezone, parse_stamp};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) lists: OrganizerLists,
    pub(crate) archive_prefix: String,
}

impl<'a> CommandContext<'a> {
    /// Config lists replace the built-in ones wholesale
    pub(crate) fn new(cli: &'a Cli, config: Config) -> Self {
        let lists = OrganizerLists::new(
            config.archive.unwrap_or_else(default_archive_list),
            config.rename.unwrap_or_else(default_rename_list),
        );
        let archive_prefix = config
            .archive_prefix
            .unwrap_or_else(|| DEFAULT_ARCHIVE_PREFIX.to_string());
        Self {
            cli,
            lists,
            archive_prefix,
        }
    }

    fn clock(&self) -> Result<Box<dyn Clock>, AppError> {
        if let Some(at) = self.cli.at.as_deref() {
            return Ok(Box::new(FixedClock(parse_stamp(at)?)));
        }
        let timezone = Timezone::parse(self.cli.timezone.as_deref())?;
        Ok(Box::new(SystemClock::new(timezone)))
    }
}

fn handle_organize(ctx: &CommandContext<'_>, dry_run: bool) -> Result<(), AppError> {
    let clock = ctx.clock()?;
    let fs = OsFileSystem::new(&ctx.cli.root);
    debug!(root = %ctx.cli.root.display(), "using working root");

    let organizer = Organizer::new(
        &fs,
        &ctx.lists,
        OrganizerOptions {
            archive_prefix: ctx.archive_prefix.clone(),
            guard: ctx.cli.guard,
            dry_run,
            quiet: ctx.cli.json,
        },
    );
    let report = organizer.run(clock.as_ref())?;

    if ctx.cli.json {
        println!("{}", output_report_json(&report)?);
    } else {
        print_summary(&report, ctx.cli.use_color());
    }
    Ok(())
}

fn handle_lists(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    ctx.lists.validate()?;
    if ctx.cli.json {
        println!("{}", output_lists_json(&ctx.lists)?);
    } else {
        print_lists(&ctx.lists, ctx.cli.use_color());
    }
    Ok(())
}

pub(crate) fn handle_command(command: Commands, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match command {
        Commands::Run => handle_organize(ctx, false),
        Commands::Plan => handle_organize(ctx, true),
        Commands::Lists => handle_lists(ctx),
    }
}
