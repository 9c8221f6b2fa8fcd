//! Terminal shell for the deskpad widgets.
//!
//! Reads line commands from stdin, dispatches them as widget events and
//! prints the resulting views. This is the "application shell" the widget
//! cores are designed to be embedded in; everything interesting lives in
//! the library.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context as _, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use deskpad::calculator::Calculator;
use deskpad::cart::{Catalog, CartStore, CartView, CurrencyFormat};
use deskpad::config::Config;
use deskpad::events::{
    CalcKey, CartAction, Command, FormAction, SliderAction, TodoAction, WidgetEvent, parse_line,
};
use deskpad::form::{Field, SignupForm, SubmitOutcome, SUCCESS_MESSAGE};
use deskpad::slider::{Autoplay, Slider};
use deskpad::storage::{FileStore, KeyValueStore, MemoryStore};
use deskpad::todo::{TitlePrompt, TodoListView, TodoStore};

#[derive(Parser)]
#[command(name = "deskpad", about = "Small interactive desk widgets in a terminal.")]
struct Args {
    /// Path to the config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for durable widget state. Overrides the config file.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep all state in memory; nothing is written to disk.
    #[arg(long)]
    in_memory: bool,
}

/// Title replacement already collected by the shell; `None` means the
/// user cancelled the edit.
struct ProvidedTitle(Option<String>);

impl TitlePrompt for ProvidedTitle {
    fn replacement_title(&mut self, _current: &str) -> Option<String> {
        self.0.take()
    }
}

struct Shell {
    calculator: Calculator,
    todos: TodoStore<Box<dyn KeyValueStore>>,
    cart: CartStore<Box<dyn KeyValueStore>>,
    catalog: Catalog,
    currency: CurrencyFormat,
    form: SignupForm,
    slider: Slider,
    autoplay: Autoplay,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = Config::load(args.config.as_deref())?;

    let mut shell = Shell::new(&args, &config)?;
    print_help();
    shell.run()
}

impl Shell {
    fn new(args: &Args, config: &Config) -> Result<Self> {
        let catalog = Catalog::builtin();
        let slider = Slider::new(catalog.products().len());
        let autoplay = Autoplay::new(
            Duration::from_secs(config.slider_interval_secs),
            Instant::now(),
        );

        Ok(Self {
            calculator: Calculator::new(),
            todos: TodoStore::load(open_store(args, config)?),
            cart: CartStore::load(open_store(args, config)?),
            catalog,
            currency: config.currency.clone(),
            form: SignupForm::new(),
            slider,
            autoplay,
        })
    }

    fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = line.context("failed to read from stdin")?;
            if line.trim().is_empty() {
                continue;
            }

            match parse_line(&line) {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => print_help(),
                Ok(Command::Event(event)) => self.dispatch(event),
                Err(err) => println!("{err}"),
            }

            // Cooperative auto-advance: the slider moves between commands
            // once its deadline has passed.
            if self.autoplay.poll(Instant::now()) {
                self.slider.next();
                debug!(index = self.slider.index(), "slider auto-advanced");
            }

            io::stdout().flush().ok();
        }
        Ok(())
    }

    fn dispatch(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Calc(key) => {
                match key {
                    CalcKey::Digit(d) => self.calculator.enter_digit(d),
                    CalcKey::Operator(op) => self.calculator.choose_operator(op),
                    CalcKey::Percent => self.calculator.percent(),
                    CalcKey::Evaluate => self.calculator.evaluate(),
                    CalcKey::Clear => self.calculator.clear_all(),
                    CalcKey::Delete => self.calculator.delete_last(),
                }
                println!("[calc] {}", self.calculator.display());
            }
            WidgetEvent::Todo(action) => {
                match action {
                    TodoAction::Add(title) => {
                        if !self.todos.add(&title) {
                            println!("(a task needs a title)");
                        }
                    }
                    TodoAction::Toggle(id) => self.todos.toggle(&id),
                    TodoAction::Edit { id, title } => {
                        self.todos.edit_with(&id, &mut ProvidedTitle(title));
                    }
                    TodoAction::Remove(id) => self.todos.remove(&id),
                }
                print_todos(&self.todos.view());
            }
            WidgetEvent::Cart(action) => {
                match action {
                    CartAction::Add(id) | CartAction::Increment(id) => self.cart.add(&id),
                    CartAction::Decrement(id) => self.cart.decrement(&id),
                    CartAction::Remove(id) => self.cart.remove(&id),
                    CartAction::Clear => self.cart.clear(),
                }
                print_cart(&self.cart.view(&self.catalog, &self.currency));
            }
            WidgetEvent::Slider(action) => {
                match action {
                    SliderAction::Next => self.slider.next(),
                    SliderAction::Prev => self.slider.prev(),
                    SliderAction::GoTo(index) => self.slider.go_to(index),
                }
                // Manual navigation restarts the auto-advance schedule.
                self.autoplay.restart(Instant::now());
                self.print_slider();
            }
            WidgetEvent::Form(action) => {
                match action {
                    FormAction::Input { field, value } => {
                        let status = self.form.input(field, &value);
                        match status.message() {
                            Some(message) => println!("[form] {message}"),
                            None => println!("[form] ok"),
                        }
                    }
                    FormAction::Submit => match self.form.submit() {
                        SubmitOutcome::Accepted => println!("[form] {SUCCESS_MESSAGE}"),
                        SubmitOutcome::Rejected => {
                            for field in Field::ALL {
                                if let Some(message) = self.form.status(field).message() {
                                    println!("[form] {field:?}: {message}");
                                }
                            }
                        }
                    },
                }
            }
        }
    }

    fn print_slider(&self) {
        let view = self.slider.view();
        let dots: String = view
            .dots
            .iter()
            .map(|&active| if active { '●' } else { '○' })
            .collect();
        let title = self
            .catalog
            .products()
            .get(view.index)
            .map(|product| product.title.as_str())
            .unwrap_or("");
        println!("[slider] {} {dots}", title);
    }
}

fn open_store(args: &Args, config: &Config) -> Result<Box<dyn KeyValueStore>> {
    if args.in_memory {
        return Ok(Box::new(MemoryStore::new()));
    }

    let root = args
        .data_dir
        .clone()
        .or_else(|| config.data_dir.clone())
        .or_else(FileStore::default_root)
        .context("no data directory available; pass --data-dir or --in-memory")?;

    Ok(Box::new(FileStore::open(root)?))
}

fn print_todos(view: &TodoListView) {
    if let Some(placeholder) = view.placeholder {
        println!("[todo] {placeholder}");
        return;
    }
    for row in &view.rows {
        let mark = if row.completed { 'x' } else { ' ' };
        println!("[todo] [{mark}] {}  ({} · id {})", row.title, row.toggle_label, row.id);
    }
}

fn print_cart(view: &CartView) {
    if let Some(placeholder) = view.placeholder {
        println!("[cart] {placeholder}");
    }
    for line in &view.lines {
        println!(
            "[cart] {} × {}  {}  (id {})",
            line.title, line.quantity, line.subtotal, line.product_id
        );
    }
    println!("[cart] total: {}", view.total);
}

fn print_help() {
    println!(
        "commands:\n  \
         calc <0-9|.|+|-|*|/|%|=|clear|del>\n  \
         todo add <title> | toggle <id> | edit <id> [title] | remove <id>\n  \
         cart add <product> | inc <product> | dec <product> | remove <product> | clear\n  \
         slider next | prev | goto <n>\n  \
         form email|password|phone <value> | submit\n  \
         help | quit"
    );
}
