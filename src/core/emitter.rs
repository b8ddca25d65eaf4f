//! Base emitter: line buffer, caption/label storage and the render contract

/// Accumulated content of one LaTeX fragment
///
/// Body lines are only ever appended; caption and label are last-write-wins.
/// Lines are added by the emitters only, so grid and row bookkeeping stays
/// in step with the body:
///
/// ```compile_fail
/// let mut fragment = texfrag::Fragment::new();
/// fragment.push("\\includegraphics{x.png}".to_string());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    lines: Vec<String>,
    caption: Option<String>,
    label: Option<String>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body lines in insertion order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub(crate) fn push(&mut self, line: String) {
        self.lines.push(line);
    }

    /// Append `suffix` to the most recent body line, if any
    pub(crate) fn extend_last(&mut self, suffix: &str) {
        if let Some(last) = self.lines.last_mut() {
            last.push_str(suffix);
        }
    }

    /// Raw caption text
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Raw label text
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = Some(caption.into());
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }

    /// `\caption{...}` line, if a caption is set
    pub fn caption_line(&self) -> Option<String> {
        self.caption.as_ref().map(|c| format!("\\caption{{{}}}", c))
    }

    /// `\label{...}` line, if a label is set
    pub fn label_line(&self) -> Option<String> {
        self.label.as_ref().map(|l| format!("\\label{{{}}}", l))
    }
}

/// Common interface of every emitter
///
/// Implementors own a [`Fragment`] and decide which lines wrap it.
/// Rendering never mutates the emitter.
pub trait Emitter {
    /// Shared body buffer
    fn fragment(&self) -> &Fragment;

    fn fragment_mut(&mut self) -> &mut Fragment;

    /// Lines written before the body (environment open, caption, layout)
    fn prologue(&self) -> Vec<String>;

    /// Lines written after the body (environment close, label)
    fn epilogue(&self) -> Vec<String>;

    fn set_caption(&mut self, caption: &str) {
        self.fragment_mut().set_caption(caption);
    }

    fn set_label(&mut self, label: &str) {
        self.fragment_mut().set_label(label);
    }

    /// Render prologue, body and epilogue joined by newlines
    fn render(&self) -> String {
        let mut lines = self.prologue();
        lines.extend(self.fragment().lines().iter().cloned());
        lines.extend(self.epilogue());
        lines.join("\n")
    }
}
