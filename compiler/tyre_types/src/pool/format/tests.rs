use super::*;
use crate::ChanDir;
use pretty_assertions::assert_eq;

#[test]
fn format_scalars() {
    let pool = Pool::new();
    assert_eq!(pool.format_type(Idx::INT), "int");
    assert_eq!(pool.format_type(Idx::UINTPTR), "uintptr");
    assert_eq!(pool.format_type(Idx::STRING), "string");
}

#[test]
fn format_sentinels() {
    let pool = Pool::new();
    assert_eq!(pool.format_type(Idx::NONE), "<none>");
    assert_eq!(pool.format_type(Idx::from_raw(9_999)), "<invalid>");
}

#[test]
fn format_containers() {
    let mut pool = Pool::new();
    let ptr = pool.pointer(Idx::INT);
    let slice = pool.slice(ptr);
    let array = pool.array(4, Idx::BOOL);
    let map = pool.map(Idx::STRING, slice);

    assert_eq!(pool.format_type(ptr), "*int");
    assert_eq!(pool.format_type(slice), "[]*int");
    assert_eq!(pool.format_type(array), "[4]bool");
    assert_eq!(pool.format_type(map), "map[string][]*int");
}

#[test]
fn format_channels() {
    let mut pool = Pool::new();
    let both = pool.chan(ChanDir::Both, Idx::INT);
    let recv = pool.chan(ChanDir::Recv, Idx::INT);
    let send = pool.chan(ChanDir::Send, Idx::INT);

    assert_eq!(pool.format_type(both), "chan int");
    assert_eq!(pool.format_type(recv), "<-chan int");
    assert_eq!(pool.format_type(send), "chan<- int");
}

#[test]
fn format_functions() {
    let mut pool = Pool::new();
    let error = pool.interface("error", &["Error"]);
    let nullary = pool.func(&[], &[]);
    let one = pool.func(&[Idx::INT, Idx::STRING], &[error]);
    let two = pool.func(&[Idx::INT], &[Idx::INT, error]);

    assert_eq!(pool.format_type(nullary), "func()");
    assert_eq!(pool.format_type(one), "func(int, string) error");
    assert_eq!(pool.format_type(two), "func(int) (int, error)");
}

#[test]
fn format_recursive_type_terminates() {
    let mut pool = Pool::new();
    let rec = pool.named("recFunc", |p, this| p.func(&[], &[this])).unwrap();
    let outer = pool.procedure(&[rec]);

    assert_eq!(pool.format_type(rec), "recFunc");
    assert_eq!(pool.format_type(outer), "func(recFunc)");
}
