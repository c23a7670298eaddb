// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

use rustyline::highlight::Highlighter;
use rustyline_derive::{Completer, Helper, Hinter, Validator};

#[derive(Helper, Completer, Hinter, Validator)]
pub struct MyHelper {
    // `source` and `lex` take file names.
    #[rustyline(Completer)]
    completer: rustyline::completion::FilenameCompleter,
    highlighter: rustyline::highlight::MatchingBracketHighlighter,
    #[rustyline(Validator)]
    validator: rustyline::validate::MatchingBracketValidator,
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
    colored_prompt: String,
}

impl Highlighter for MyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> std::borrow::Cow<'b, str> {
        if default {
            std::borrow::Cow::Borrowed(&self.colored_prompt)
        } else {
            std::borrow::Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned("\x1b[1m".to_owned() + hint + "\x1b[m")
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> std::borrow::Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(
        &self,
        line: &str,
        pos: usize,
        kind: rustyline::highlight::CmdKind,
    ) -> bool {
        self.highlighter.highlight_char(line, pos, kind)
    }
}

pub type MyEditor = rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor() -> rustyline::Result<MyEditor> {
    let mut rl = MyEditor::new()?;
    rl.set_helper(Some(MyHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        highlighter: rustyline::highlight::MatchingBracketHighlighter::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
        colored_prompt: "\x1b[1;32mwordhook>\x1b[0m ".to_owned(),
        validator: rustyline::validate::MatchingBracketValidator::new(),
    }));
    Ok(rl)
}
