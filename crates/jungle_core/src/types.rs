/// Board width (files A..G).
pub const COLS: i8 = 7;
/// Board height (ranks 9..1, top to bottom).
pub const ROWS: i8 = 9;
pub const NUM_SQUARES: usize = (COLS as usize) * (ROWS as usize);

/// Square index `row * COLS + col`, row 0 is player two's home edge.
pub type Square = u8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
    /// 1 or 2, as shown to players.
    pub fn number(self) -> u8 {
        self.idx() as u8 + 1
    }
}

/// The eight animals, declared in rank order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Rat,
    Cat,
    Dog,
    Wolf,
    Leopard,
    Tiger,
    Lion,
    Elephant,
}

impl Species {
    pub const ALL: [Species; 8] = [
        Species::Rat,
        Species::Cat,
        Species::Dog,
        Species::Wolf,
        Species::Leopard,
        Species::Tiger,
        Species::Lion,
        Species::Elephant,
    ];

    /// Hierarchy rank, 1 (rat) to 8 (elephant).
    #[inline]
    pub fn rank(self) -> u8 {
        self as u8 + 1
    }

    /// Tiger and lion may leap across the river.
    #[inline]
    pub fn can_jump(self) -> bool {
        matches!(self, Species::Tiger | Species::Lion)
    }

    pub fn letter(self) -> char {
        match self {
            Species::Rat => 'r',
            Species::Cat => 'c',
            Species::Dog => 'd',
            Species::Wolf => 'w',
            Species::Leopard => 'j',
            Species::Tiger => 't',
            Species::Lion => 'l',
            Species::Elephant => 'e',
        }
    }

    pub fn from_letter(ch: char) -> Option<Species> {
        Species::ALL
            .into_iter()
            .find(|s| s.letter() == ch.to_ascii_lowercase())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub species: Species,
    pub owner: Player,
}

impl Piece {
    pub fn new(species: Species, owner: Player) -> Self {
        Self { species, owner }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", sq_to_coord(self.from), sq_to_coord(self.to))
    }
}

// Helpers
pub fn col_of(sq: Square) -> i8 {
    (sq as i8) % COLS
}
pub fn row_of(sq: Square) -> i8 {
    (sq as i8) / COLS
}
pub fn sq(col: i8, row: i8) -> Option<Square> {
    if (0..COLS).contains(&col) && (0..ROWS).contains(&row) {
        Some((row * COLS + col) as Square)
    } else {
        None
    }
}

pub fn manhattan(a: Square, b: Square) -> i8 {
    (col_of(a) - col_of(b)).abs() + (row_of(a) - row_of(b)).abs()
}

/// Orthogonal steps as `(dcol, drow)`.
pub const DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Orthogonal neighbours that are on the board.
pub fn neighbours(sq: Square) -> impl Iterator<Item = Square> {
    let (c, r) = (col_of(sq), row_of(sq));
    DIRECTIONS
        .into_iter()
        .filter_map(move |(dc, dr)| self::sq(c + dc, r + dr))
}

/// `A1`..`G9`; rank 1 is row 8 (player one's edge).
pub fn sq_to_coord(sq: Square) -> String {
    let c = (b'A' + col_of(sq) as u8) as char;
    let r = (b'1' + (ROWS - 1 - row_of(sq)) as u8) as char;
    format!("{c}{r}")
}

pub fn coord_to_sq(c: &str) -> Option<Square> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0].to_ascii_uppercase();
    let r = b[1];
    if !(b'A'..=b'G').contains(&f) || !(b'1'..=b'9').contains(&r) {
        return None;
    }
    let col = (f - b'A') as i8;
    let row = ROWS - 1 - (r - b'1') as i8;
    sq(col, row)
}
