//! Command dispatch for the `dpatterns` binary

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::builder::{TreeBuilder, COMPOSITE_DEMO, DEMO_TREE};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::component::Traverse;
use crate::config::{global_config_path, LabelMode, RenderStyle, Settings};
use crate::prototype::{
    ConcretePrototypeA, ConcretePrototypeB, Prototype, PrototypeFactory, TreePrototype,
};
use crate::tree_stack::{depth, leaf_labels, leaf_paths, total_node_count};
use crate::tree_traits::TreeNodeConvert;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Composite { tree, style } => {
            let settings = Settings::load(cli.config.as_deref())?;
            let style = style.unwrap_or(settings.render.style);
            match tree.as_deref().or(settings.tree.as_deref()) {
                Some(expression) => _composite(&[expression], style),
                None => _composite(&COMPOSITE_DEMO, style),
            }
        }
        Commands::Iterate { tree, label } => {
            let settings = Settings::load(cli.config.as_deref())?;
            let label = label.unwrap_or(settings.render.label);
            _iterate(resolve_tree(tree.as_deref(), &settings), label)
        }
        Commands::Info { tree } => {
            let settings = Settings::load(cli.config.as_deref())?;
            _info(resolve_tree(tree.as_deref(), &settings))
        }
        Commands::Prototype { label } => _prototype(label),
        Commands::Config { command } => _config(cli, command),
        Commands::Completion { shell } => {
            _completion(*shell);
            Ok(())
        }
    }
}

/// Tree argument first, then the configured tree, then the demo tree.
fn resolve_tree<'a>(arg: Option<&'a str>, settings: &'a Settings) -> &'a str {
    arg.or(settings.tree.as_deref()).unwrap_or(DEMO_TREE)
}

#[instrument]
fn _composite(expressions: &[&str], style: RenderStyle) -> CliResult<()> {
    let builder = TreeBuilder::new();
    for expression in expressions {
        let tree = builder.build(expression)?;
        match style {
            RenderStyle::Inline => output::info(&tree.render()),
            RenderStyle::Tree => output::info(&tree.to_tree_string()),
        }
    }
    Ok(())
}

#[instrument]
fn _iterate(expression: &str, label: LabelMode) -> CliResult<()> {
    let tree = TreeBuilder::new().build(expression)?;
    let mut iter = tree.make_iterator();

    iter.reset();
    while iter.has_next() {
        iter.advance()?;
        let node = iter.current()?;
        match label {
            LabelMode::Name => output::info(node.name()),
            LabelMode::Render => output::info(&node.render()),
        }
    }
    debug!(state = ?iter.state(), "iteration finished");
    Ok(())
}

#[instrument]
fn _info(expression: &str) -> CliResult<()> {
    let tree = TreeBuilder::new().build(expression)?;
    let root = &*tree;

    output::header(root.name());
    output::action("nodes", &total_node_count(root));
    output::action("depth", &depth(root));
    output::action("leaves", &leaf_labels(root).join(", "));
    output::header("paths");
    for path in leaf_paths(root) {
        output::detail(&path);
    }
    Ok(())
}

#[instrument]
fn _prototype(label: &str) -> CliResult<()> {
    let factory = PrototypeFactory::new();

    output::header("value prototype");
    let mut original = ConcretePrototypeA::new(label);
    original.add_tag("original");
    let mut copy = factory.get_clone(&original)?;
    output::action("original", &original.describe());
    output::action("clone", &copy.describe());

    if let Some(copy) = copy.as_any_mut().downcast_mut::<ConcretePrototypeA>() {
        copy.set_label(format!("{label}-copy"));
        copy.add_tag("mutated");
    }
    output::action("original", &original.describe());
    output::action("clone", &copy.describe());

    output::header("tree prototype");
    let tree = TreePrototype::new(TreeBuilder::new().build(DEMO_TREE)?);
    let tree_copy = factory.get_clone(&tree)?;
    output::action("original", &tree.describe());
    output::action("clone", &tree_copy.describe());

    output::header("bound prototype");
    let mut bound = ConcretePrototypeB::new(label);
    bound.bind(42);
    match factory.get_clone(&bound) {
        Ok(copy) => output::success(&copy.describe()),
        Err(e) => output::failure(&e),
    }
    Ok(())
}

#[instrument(skip(cli))]
fn _config(cli: &Cli, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let settings = Settings::load(cli.config.as_deref())?;
            output::info(&settings.to_toml()?);
        }
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::failure("no config directory available on this platform"),
        },
    }
    Ok(())
}

fn _completion(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}
