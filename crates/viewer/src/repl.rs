use bisect_viewer::{Command, Session, Settings, TraceViewer, render};
use colored::Colorize;
use rustyline::error::ReadlineError;

/// Interactive stepper over the trace of the most recent solve.
pub struct Stepper {
    session: Session,
    pending: Settings,
}

impl Stepper {
    pub fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(),
            pending: settings,
        }
    }

    pub fn run(&mut self) -> rustyline::Result<()> {
        println!("{}", "Bisection step-by-step viewer".bold());
        println!("Press <enter> for the next step, `h` for help.\n");
        self.restart();

        let mut rl = rustyline::DefaultEditor::new()?;
        loop {
            match rl.readline("bisect> ") {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str())?;
                    }
                    match line.parse::<Command>() {
                        Ok(Command::Quit) => break,
                        Ok(command) => self.handle(command),
                        Err(err) => eprintln!("{} {err}", "error:".red()),
                    }
                }
                Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn handle(&mut self, command: Command) {
        match command {
            Command::Next => self.navigate(TraceViewer::next, "already at the last step"),
            Command::Previous => self.navigate(TraceViewer::previous, "already at the first step"),
            Command::First => self.navigate(
                |viewer| {
                    viewer.first();
                    true
                },
                "",
            ),
            Command::Last => self.navigate(
                |viewer| {
                    viewer.last();
                    true
                },
                "",
            ),
            Command::Table => match self.session.viewer() {
                Some(viewer) => println!("{}", render::table(viewer.solution())),
                None => no_solution(),
            },
            Command::Show => self.show_pending(),
            Command::Expression(expression) => {
                self.pending.expression = expression;
                pending_hint();
            }
            Command::Bracket(lower, upper) => {
                self.pending.lower = lower;
                self.pending.upper = upper;
                pending_hint();
            }
            Command::Tolerance(tolerance) => {
                self.pending.tolerance = tolerance;
                pending_hint();
            }
            Command::MaxIters(max_iters) => {
                self.pending.max_iters = max_iters;
                pending_hint();
            }
            Command::Restart => self.restart(),
            Command::Help => println!("{}", Command::HELP),
            Command::Quit => {}
        }
    }

    fn restart(&mut self) {
        match self.session.start(&self.pending) {
            Ok(viewer) => {
                println!(
                    "{} {} on [{}, {}]",
                    "Solving".green(),
                    viewer.expression().bold(),
                    self.pending.lower,
                    self.pending.upper,
                );
                show(viewer);
            }
            Err(err) => {
                eprintln!("{} {err}", "error:".red());
                if self.session.viewer().is_some() {
                    eprintln!("keeping the previous trace");
                }
            }
        }
    }

    fn navigate(&mut self, mv: impl FnOnce(&mut TraceViewer) -> bool, at_end: &str) {
        let Some(viewer) = self.session.viewer_mut() else {
            no_solution();
            return;
        };
        if mv(viewer) {
            show(viewer);
        } else {
            println!("{}", at_end.yellow());
        }
    }

    fn show_pending(&self) {
        let s = &self.pending;
        println!("expression = {}", s.expression);
        println!("bracket    = [{}, {}]", s.lower, s.upper);
        println!("tolerance  = {:e}", s.tolerance);
        println!("max iters  = {}", s.max_iters);
    }
}

fn show(viewer: &TraceViewer) {
    let Some(step) = viewer.current() else {
        return;
    };
    println!(
        "\n{}",
        format!("[{}/{}]", viewer.position(), viewer.len()).dimmed()
    );
    println!("{}", render::step(step));
    if viewer.is_finished() {
        println!("\n{}", render::finished(viewer.solution()).green().bold());
    }
}

fn no_solution() {
    println!("{}", "no trace yet; adjust the settings and `restart`".yellow());
}

fn pending_hint() {
    println!("updated; `restart` to solve with the new settings");
}
