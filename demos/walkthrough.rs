//! Walks through the list and the insertion adapters, printing each result
//! next to the same run against the standard containers.
//!
//! Run with `cargo run --example walkthrough`. Set `RUST_LOG=cursor_list=trace`
//! to see every node being linked and unlinked.

use cursor_list::insert::{
    back_inserter, front_inserter, inserter, BackInserter, FrontInserter, InsertBefore, Inserter,
};
use cursor_list::{List, ListError};
use std::collections::{LinkedList, VecDeque};
use std::fmt::Display;
use std::iter::FromIterator;
use tracing_subscriber::EnvFilter;

const INPUT: [i32; 5] = [1, 2, 3, 4, 5];

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
}

fn print_all<'a, T, I>(title: &str, items: I)
where
    T: Display + 'a,
    I: IntoIterator<Item = &'a T>,
{
    println!("-- {} --", title);
    let line: Vec<String> = items.into_iter().map(|x| x.to_string()).collect();
    println!("{}", line.join(" "));
}

fn cursor_forward(list: &mut List<i32>) -> Result<Vec<i32>, ListError> {
    let mut out = Vec::new();
    list.go_to_begin();
    if list.is_empty() {
        return Ok(out);
    }
    loop {
        out.push(*list.get()?);
        if !list.go_next()? {
            return Ok(out);
        }
    }
}

fn cursor_backward(list: &mut List<i32>) -> Result<Vec<i32>, ListError> {
    let mut out = Vec::new();
    list.go_to_end();
    if list.is_empty() {
        return Ok(out);
    }
    loop {
        out.push(*list.get()?);
        if !list.go_prev()? {
            return Ok(out);
        }
    }
}

fn position_forward(list: &List<i32>) -> Result<Vec<i32>, ListError> {
    let mut out = Vec::new();
    let mut pos = list.begin();
    while pos != list.end() {
        out.push(*list.at(pos)?);
        pos = list.advance(pos)?;
    }
    Ok(out)
}

fn fill_at_front<C>(container: &mut C) -> Result<(), C::Error>
where
    C: InsertBefore<i32>,
{
    for &x in INPUT.iter() {
        let anchor = container.front_position();
        Inserter::new(&mut *container, anchor).assign(x)?;
    }
    Ok(())
}

fn main() -> Result<(), ListError> {
    enable_tracing();

    let mut list = List::from_iter(INPUT.iter().copied());
    print_all("List forward", &cursor_forward(&mut list)?);
    print_all("List backward", &cursor_backward(&mut list)?);
    print_all("List forward by position", &position_forward(&list)?);
    print_all("List forward by ranged-based for", &list);

    let linked = LinkedList::from_iter(INPUT.iter().copied());
    print_all("LinkedList forward", &linked);
    print_all("LinkedList backward", linked.iter().rev());

    let mut deque: VecDeque<i32> = VecDeque::new();
    fill_at_front(&mut deque)?;
    print_all("VecDeque by inserter at front", &deque);

    let mut list: List<i32> = List::new();
    fill_at_front(&mut list)?;
    print_all("List by inserter at front", &list);

    let mut deque: VecDeque<i32> = VecDeque::new();
    for &x in INPUT.iter() {
        inserter(&mut deque, 0).assign(x)?;
    }
    print_all("VecDeque by inserter", &deque);

    let mut list: List<i32> = List::new();
    for &x in INPUT.iter() {
        let begin = list.begin();
        inserter(&mut list, begin).assign(x)?;
    }
    print_all("List by inserter", &list);

    let mut linked: LinkedList<i32> = LinkedList::new();
    for &x in INPUT.iter() {
        FrontInserter::new(&mut linked).assign(x);
    }
    print_all("LinkedList by front inserter", &linked);

    let mut linked: LinkedList<i32> = LinkedList::new();
    for &x in INPUT.iter() {
        BackInserter::new(&mut linked).assign(x);
    }
    print_all("LinkedList by back inserter", &linked);

    println!("---------------------");

    let mut list: List<i32> = List::new();
    for &x in INPUT.iter() {
        front_inserter(&mut list).assign(x);
    }
    print_all("List by front inserter", &list);

    let mut list: List<i32> = List::new();
    for &x in INPUT.iter() {
        back_inserter(&mut list).assign(x);
    }
    print_all("List by back inserter", &list);

    let mut list: List<i32> = List::new();
    back_inserter(&mut list).extend(0..10_000);
    back_inserter(&mut list).extend(INPUT.iter().copied());
    println!("-- List by back inserter, many --");
    println!(
        "len {}, front {:?}, back {:?}",
        list.len(),
        list.front(),
        list.back()
    );

    println!("Done");
    Ok(())
}
