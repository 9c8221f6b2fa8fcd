//! Discrete interaction events and their textual command form.
//!
//! The widgets are driven by events identifying an action, an optional
//! value and, for list rows, the item id. The terminal shell feeds them
//! in as line commands, e.g.:
//!
//! ```text
//! calc 7          calc +          calc =          calc clear
//! todo add Buy milk               todo toggle <id>
//! cart add coffee                 cart dec coffee
//! slider next                     slider goto 2
//! form email user@example.com     form submit
//! ```

use anyhow::{Context, Result, bail};

use crate::calculator::Operator;
use crate::form::Field;

/// Calculator keypad events.
#[derive(Clone, Debug, PartialEq)]
pub enum CalcKey {
    Digit(char),
    Operator(Operator),
    Percent,
    Evaluate,
    Clear,
    Delete,
}

/// Todo list events. `Edit` carries the replacement title when the shell
/// already collected one; `None` means the prompt was cancelled.
#[derive(Clone, Debug, PartialEq)]
pub enum TodoAction {
    Add(String),
    Toggle(String),
    Edit { id: String, title: Option<String> },
    Remove(String),
}

/// Cart events.
#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    Add(String),
    Increment(String),
    Decrement(String),
    Remove(String),
    Clear,
}

/// Slider navigation events.
#[derive(Clone, Debug, PartialEq)]
pub enum SliderAction {
    Next,
    Prev,
    GoTo(usize),
}

/// Form events.
#[derive(Clone, Debug, PartialEq)]
pub enum FormAction {
    Input { field: Field, value: String },
    Submit,
}

/// One user interaction, routed to its widget.
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetEvent {
    Calc(CalcKey),
    Todo(TodoAction),
    Cart(CartAction),
    Slider(SliderAction),
    Form(FormAction),
}

/// A parsed shell command: either a widget event or a shell directive.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Event(WidgetEvent),
    Help,
    Quit,
}

/// Parse one command line. Unknown widgets, actions or malformed
/// arguments are reported as errors, never panics.
pub fn parse_line(line: &str) -> Result<Command> {
    let line = line.trim();
    let (head, rest) = split_word(line);

    match head {
        "help" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "calc" => parse_calc(rest).map(|key| Command::Event(WidgetEvent::Calc(key))),
        "todo" => parse_todo(rest).map(|action| Command::Event(WidgetEvent::Todo(action))),
        "cart" => parse_cart(rest).map(|action| Command::Event(WidgetEvent::Cart(action))),
        "slider" => parse_slider(rest).map(|action| Command::Event(WidgetEvent::Slider(action))),
        "form" => parse_form(rest).map(|action| Command::Event(WidgetEvent::Form(action))),
        "" => bail!("empty command"),
        other => bail!("unknown widget: {other}"),
    }
}

fn split_word(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim_start()),
        None => (input, ""),
    }
}

fn parse_calc(rest: &str) -> Result<CalcKey> {
    match rest {
        "" => bail!("calc needs a key"),
        "=" => return Ok(CalcKey::Evaluate),
        "%" => return Ok(CalcKey::Percent),
        "clear" => return Ok(CalcKey::Clear),
        "del" | "delete" => return Ok(CalcKey::Delete),
        _ => {}
    }

    let mut chars = rest.chars();
    let Some(key) = chars.next() else {
        bail!("calc needs a key");
    };
    if chars.next().is_some() {
        bail!("calc takes one key at a time, got: {rest}");
    }

    if key.is_ascii_digit() || key == '.' {
        return Ok(CalcKey::Digit(key));
    }
    Operator::from_symbol(key)
        .map(CalcKey::Operator)
        .with_context(|| format!("unknown calculator key: {key}"))
}

fn parse_todo(rest: &str) -> Result<TodoAction> {
    let (action, args) = split_word(rest);
    match action {
        "add" => {
            // Whitespace-only titles are passed through; the store
            // rejects them and the shell reports it.
            Ok(TodoAction::Add(args.to_string()))
        }
        "toggle" => Ok(TodoAction::Toggle(required_id(args, "todo toggle")?)),
        "edit" => {
            let (id, title) = split_word(args);
            if id.is_empty() {
                bail!("todo edit needs an item id");
            }
            let title = (!title.is_empty()).then(|| title.to_string());
            Ok(TodoAction::Edit {
                id: id.to_string(),
                title,
            })
        }
        "remove" | "delete" => Ok(TodoAction::Remove(required_id(args, "todo remove")?)),
        "" => bail!("todo needs an action"),
        other => bail!("unknown todo action: {other}"),
    }
}

fn parse_cart(rest: &str) -> Result<CartAction> {
    let (action, args) = split_word(rest);
    match action {
        "add" => Ok(CartAction::Add(required_id(args, "cart add")?)),
        "inc" | "increment" => Ok(CartAction::Increment(required_id(args, "cart inc")?)),
        "dec" | "decrement" => Ok(CartAction::Decrement(required_id(args, "cart dec")?)),
        "remove" | "delete" => Ok(CartAction::Remove(required_id(args, "cart remove")?)),
        "clear" => Ok(CartAction::Clear),
        "" => bail!("cart needs an action"),
        other => bail!("unknown cart action: {other}"),
    }
}

fn parse_slider(rest: &str) -> Result<SliderAction> {
    let (action, args) = split_word(rest);
    match action {
        "next" => Ok(SliderAction::Next),
        "prev" => Ok(SliderAction::Prev),
        "goto" => {
            let index = args
                .parse::<usize>()
                .with_context(|| format!("slider goto needs a dot index, got: {args:?}"))?;
            Ok(SliderAction::GoTo(index))
        }
        "" => bail!("slider needs an action"),
        other => bail!("unknown slider action: {other}"),
    }
}

fn parse_form(rest: &str) -> Result<FormAction> {
    let (action, args) = split_word(rest);
    match action {
        "email" => Ok(input(Field::Email, args)),
        "password" => Ok(input(Field::Password, args)),
        "phone" => Ok(input(Field::Phone, args)),
        "submit" => Ok(FormAction::Submit),
        "" => bail!("form needs a field or submit"),
        other => bail!("unknown form field: {other}"),
    }
}

fn input(field: Field, value: &str) -> FormAction {
    FormAction::Input {
        field,
        value: value.to_string(),
    }
}

fn required_id(args: &str, action: &str) -> Result<String> {
    if args.is_empty() {
        bail!("{action} needs an id");
    }
    Ok(args.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_keys() {
        assert_eq!(
            parse_line("calc 7").unwrap(),
            Command::Event(WidgetEvent::Calc(CalcKey::Digit('7')))
        );
        assert_eq!(
            parse_line("calc +").unwrap(),
            Command::Event(WidgetEvent::Calc(CalcKey::Operator(Operator::Add)))
        );
        assert_eq!(
            parse_line("calc =").unwrap(),
            Command::Event(WidgetEvent::Calc(CalcKey::Evaluate))
        );
        assert!(parse_line("calc 12").is_err());
        assert!(parse_line("calc x").is_err());
    }

    #[test]
    fn test_todo_add_keeps_full_title() {
        assert_eq!(
            parse_line("todo add Buy milk and eggs").unwrap(),
            Command::Event(WidgetEvent::Todo(TodoAction::Add(
                "Buy milk and eggs".to_string()
            )))
        );
    }

    #[test]
    fn test_todo_edit_without_title_means_cancelled() {
        assert_eq!(
            parse_line("todo edit abc123").unwrap(),
            Command::Event(WidgetEvent::Todo(TodoAction::Edit {
                id: "abc123".to_string(),
                title: None,
            }))
        );
        assert_eq!(
            parse_line("todo edit abc123 new title").unwrap(),
            Command::Event(WidgetEvent::Todo(TodoAction::Edit {
                id: "abc123".to_string(),
                title: Some("new title".to_string()),
            }))
        );
    }

    #[test]
    fn test_cart_actions_need_an_id() {
        assert!(parse_line("cart add").is_err());
        assert_eq!(
            parse_line("cart dec coffee").unwrap(),
            Command::Event(WidgetEvent::Cart(CartAction::Decrement(
                "coffee".to_string()
            )))
        );
        assert_eq!(
            parse_line("cart clear").unwrap(),
            Command::Event(WidgetEvent::Cart(CartAction::Clear))
        );
    }

    #[test]
    fn test_slider_goto_parses_index() {
        assert_eq!(
            parse_line("slider goto 2").unwrap(),
            Command::Event(WidgetEvent::Slider(SliderAction::GoTo(2)))
        );
        assert!(parse_line("slider goto two").is_err());
    }

    #[test]
    fn test_shell_directives() {
        assert_eq!(parse_line("help").unwrap(), Command::Help);
        assert_eq!(parse_line("quit").unwrap(), Command::Quit);
        assert!(parse_line("").is_err());
        assert!(parse_line("launch firefox").is_err());
    }
}
