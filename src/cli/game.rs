use super::Args;
use super::Choice;
use crate::predict::Selector;
use crate::predict::Uniform;
use crate::rps::Move;
use crate::rps::Outcome;
use crate::session::Round;
use crate::session::Session;
use crate::session::ledger;
use anyhow::Context;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use std::path::PathBuf;

pub struct CLI {
    session: Session,
    selector: Selector<Uniform>,
    export: PathBuf,
    files: usize,
}

impl CLI {
    pub fn new(args: Args) -> anyhow::Result<Self> {
        let dice = args.seed.map(Uniform::seeded).unwrap_or_default();
        let mut cli = Self {
            session: Session::new(),
            selector: Selector::new(args.order, dice)?,
            export: ledger::destination(args.export),
            files: 0,
        };
        if !args.imports.is_empty() {
            cli.import(&args.imports)?;
        }
        log::info!("engine ready, order {}", cli.selector.order());
        Ok(cli)
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        let items = Choice::ALL.map(|c| c.to_string());
        loop {
            let selection = Select::new()
                .with_prompt("\nYOUR MOVE")
                .report(false)
                .items(&items)
                .default(0)
                .interact()
                .context("read menu selection")?;
            match Choice::ALL[selection] {
                Choice::Quit => break Ok(()),
                choice => {
                    if let Err(e) = self.handle(choice) {
                        eprintln!("{} {:#}", "error:".red(), e);
                    }
                }
            }
        }
    }

    fn handle(&mut self, choice: Choice) -> anyhow::Result<()> {
        match choice {
            Choice::Throw(m) => Ok(self.throw(m)),
            Choice::Stats => Ok(println!("{}", self.session.stats())),
            Choice::Save => self.save(),
            Choice::Load => self.load(),
            Choice::Reset => Ok(self.reset()),
            Choice::Quit => Ok(()),
        }
    }

    fn throw(&mut self, m: Move) {
        let round = self.session.play(m, &mut self.selector);
        println!("{}", paint(&round));
    }

    fn save(&self) -> anyhow::Result<()> {
        ledger::export(&self.export, self.session.rounds())
            .with_context(|| format!("save results to {}", self.export.display()))?;
        println!(
            "saved {} rounds to {}",
            self.session.rounds().len(),
            self.export.display()
        );
        Ok(())
    }

    fn load(&mut self) -> anyhow::Result<()> {
        let input = Input::<String>::new()
            .with_prompt("Files (space separated)")
            .interact_text()
            .context("read file list")?;
        let paths = input
            .split_whitespace()
            .map(PathBuf::from)
            .collect::<Vec<_>>();
        match paths.is_empty() {
            true => Err(anyhow::anyhow!("select at least one file")),
            false => self.import(&paths),
        }
    }

    fn import(&mut self, paths: &[PathBuf]) -> anyhow::Result<()> {
        let moves = ledger::load_all(paths).context("load history")?;
        let added = self.session.extend(moves);
        self.files += paths.len();
        println!(
            "read {} files ({} total), added {} moves, history now {}",
            paths.len(),
            self.files,
            added,
            self.session.history().len()
        );
        Ok(())
    }

    fn reset(&mut self) {
        self.session.reset();
        println!("{}", "session reset".yellow());
    }
}

fn paint(round: &Round) -> String {
    let result = match round.outcome() {
        Outcome::Win => round.outcome().to_string().green(),
        Outcome::Loss => round.outcome().to_string().red(),
        Outcome::Draw => round.outcome().to_string().normal(),
    };
    format!(
        "you: {:<8} engine: {:<8} result: {}",
        round.player(),
        round.engine(),
        result
    )
}
