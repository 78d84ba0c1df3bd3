/// Document shown on a fresh start.
pub const WELCOME_DOCUMENT: &str = r#"# Welcome to Livemark!

Start typing or **drag and drop** a markdown file to begin.

## Features

- **Live Preview** - see your markdown rendered as you type
- **Syntax Highlighting** - fenced code blocks are colored by language
- **Drag & Drop** - drop a `.md` or `.markdown` file onto the window
- **Resizable Panels** - drag the divider, or hide a panel from the status bar

## Try it out!

### Code Example

```rust
fn greet(name: &str) {
    println!("Hello, {}!", name);
}

fn main() {
    greet("World");
}
```

### Lists

- Item one
- Item two
  - Nested item
- Item three

### Tasks

- [x] Write some markdown
- [ ] Drop a file

### Table

| Feature | Status |
|---------|--------|
| Live Preview | yes |
| Syntax Highlighting | yes |
| Drag & Drop | yes |

### Links

Check out https://github.com or [the CommonMark spec](https://commonmark.org) for more!
~~Plain text is boring.~~

> **Tip:** You can drag and drop any .md file to load it instantly!
"#;
