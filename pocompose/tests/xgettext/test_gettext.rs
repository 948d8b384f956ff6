use gettextrs::gettext;

fn main() {
    println!("{}", gettext("Hello, world!"));
    eprintln!("{}", gettext("Say \"hi\"\tplease"));
    println!("{}", gettext("Hello, world!"));
}
