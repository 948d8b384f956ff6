use gettextrs::gettext;

fn main() {
    println!("{}", gettext("C:\\Program Files\\"));
    println!("{}", gettext(r"Use \n for a newline"));
}
