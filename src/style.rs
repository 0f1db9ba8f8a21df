/// What to do with one inline property when the surface lets go of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Restore<'a> {
    Set(&'a str, &'a str),
    Remove(&'a str),
}

/// Inline style values on the host container before the surface overrode them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleSnapshot {
    saved: Vec<(&'static str, String)>,
}

impl StyleSnapshot {
    /// Record the current value of each property. An empty string means the
    /// property was not set inline. Repeated names keep the first reading.
    pub fn capture<'n>(
        names: impl IntoIterator<Item = &'n &'static str>,
        mut read: impl FnMut(&str) -> String,
    ) -> Self {
        let mut saved: Vec<(&'static str, String)> = Vec::new();
        for &name in names {
            if saved.iter().any(|(n, _)| *n == name) {
                continue;
            }
            saved.push((name, read(name)));
        }
        Self { saved }
    }

    /// Steps that put the container back the way the page had it.
    pub fn restore_ops(&self) -> impl Iterator<Item = Restore<'_>> {
        self.saved.iter().map(|(name, prev)| {
            if prev.is_empty() {
                Restore::Remove(name)
            } else {
                Restore::Set(name, prev.as_str())
            }
        })
    }
}
