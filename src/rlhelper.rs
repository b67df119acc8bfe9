// Copyright (C) 2020-2026 Andy Kurnia.

// https://github.com/kkawakam/rustyline/blob/master/examples/example.rs

#[derive(
    rustyline_derive::Helper,
    rustyline_derive::Completer,
    rustyline_derive::Hinter,
    rustyline_derive::Validator,
)]
pub struct MyHelper {
    #[rustyline(Completer)]
    completer: rustyline::completion::FilenameCompleter,
    #[rustyline(Hinter)]
    hinter: rustyline::hint::HistoryHinter,
}

impl rustyline::highlight::Highlighter for MyHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> std::borrow::Cow<'b, str> {
        if default {
            std::borrow::Cow::Owned(format!("\x1b[1;32m{}\x1b[m", prompt))
        } else {
            std::borrow::Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> std::borrow::Cow<'h, str> {
        std::borrow::Cow::Owned("\x1b[1m".to_owned() + hint + "\x1b[m")
    }
}

pub type MyEditor = rustyline::Editor<MyHelper, rustyline::history::DefaultHistory>;

pub fn new_rl_editor() -> rustyline::Result<MyEditor> {
    let mut rl = MyEditor::new()?;
    rl.set_helper(Some(MyHelper {
        completer: rustyline::completion::FilenameCompleter::new(),
        hinter: rustyline::hint::HistoryHinter::new(),
    }));
    Ok(rl)
}
