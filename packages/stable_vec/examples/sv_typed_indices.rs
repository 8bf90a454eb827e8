//! Pairing `StableVec` with the `strict_index` crate.
//!
//! The collection hands out plain `usize` indices. When one program juggles several
//! collections, a tag-typed wrapper keeps their indices apart at compile time: an
//! index into the sprite store cannot be used to look up a sound, even though both
//! are just integers underneath.

use stable_vec::StableVec;
use strict_index::StrictIndex;

struct Sprite {
    name: &'static str,
}

struct Sound {
    name: &'static str,
}

type SpriteIndex = StrictIndex<Sprite>;
type SoundIndex = StrictIndex<Sound>;

fn main() {
    let mut sprites = StableVec::new();
    let mut sounds = StableVec::new();

    let hero = SpriteIndex::new(sprites.insert(Sprite { name: "hero" }));
    let jump = SoundIndex::new(sounds.insert(Sound { name: "jump" }));

    // Typed lookups go through the raw value; mixing up the index types
    // would be a compile error rather than a runtime surprise.
    println!("Sprite: {}", sprites[hero.get()].name);
    println!("Sound: {}", sounds[jump.get()].name);

    // The NONE sentinel stands in for "no index" without an Option.
    let mut target: SpriteIndex = StrictIndex::NONE;
    assert!(target.is_none());

    target = hero;
    println!("Targeting sprite: {}", sprites[target.get()].name);
}
