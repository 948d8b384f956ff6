use gettextrs::{ngettext, npgettext, pgettext};

fn report(n: u32) {
    println!("{}", ngettext("One file", "{} files", n));
    println!("{}", pgettext("menu", "Open"));
    println!("{}", npgettext("disk", "One file", "{} files", n));
    println!("{}", ngettext("One file", "{} files", n + 1));
}
