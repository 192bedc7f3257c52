use crate::model::{
    Course, GameSession, HoleResult, NewCourse, NewPlayer, Player, RoundResult, StrokeIndexes,
    TeeColor, HOLES,
};
use crate::score::assemble_round_result;
use crate::storage::{
    CourseRepository, PlayerRepository, SessionRepository, StorageError,
};
use chrono::NaiveDate;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

const SCHEMA_DDL: &[&str] = &[
    include_str!("sql/schema/sqlite/00_golf_course.sql"),
    include_str!("sql/schema/sqlite/01_player.sql"),
    include_str!("sql/schema/sqlite/02_game_session.sql"),
    include_str!("sql/schema/sqlite/03_session_player.sql"),
    include_str!("sql/schema/sqlite/04_hole_result.sql"),
];

const DATE_FMT: &str = "%Y-%m-%d";

/// Embedded sqlite store behind the three repository traits. Cheap to
/// clone; clones share one connection.
#[derive(Clone)]
pub struct SqliteRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteRepository {
    /// Open (or create) the database file and apply the schema.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file cannot be opened or the DDL
    /// fails.
    pub fn open(db_path: &str) -> Result<Self, StorageError> {
        Self::from_connection(Connection::open(db_path)?)
    }

    /// In-memory database, used by tests.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the DDL fails.
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StorageError> {
        conn.execute_batch(&SCHEMA_DDL.join("\n"))?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Run an arbitrary startup script.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if any statement fails.
    pub fn execute_batch(&self, sql: &str) -> Result<(), StorageError> {
        self.conn()?.execute_batch(sql)?;
        Ok(())
    }

    fn conn(&self) -> Result<MutexGuard<'_, Connection>, StorageError> {
        self.conn
            .lock()
            .map_err(|_| StorageError::new("sqlite connection lock poisoned"))
    }
}

type CourseRow = (i64, String, i32, String, String, String, String);
type PlayerRow = (i64, String, String, String, i32, String);

fn course_from_row(row: CourseRow) -> Result<Course, StorageError> {
    let (course_id, name, holes, par, blue, white, red) = row;
    let course = Course {
        id: course_id,
        name,
        holes,
        par: serde_json::from_str(&par)?,
        handicaps: StrokeIndexes {
            blue: serde_json::from_str(&blue)?,
            white: serde_json::from_str(&white)?,
            red: serde_json::from_str(&red)?,
        },
    };
    // reject corrupt rows before they reach the scoring engine
    course
        .validate()
        .map_err(|e| StorageError::new(e.to_string()))?;
    Ok(course)
}

fn player_from_row(row: PlayerRow) -> Result<Player, StorageError> {
    let (player_id, first_name, last_name, code, handicap, tee_color) = row;
    Ok(Player {
        id: player_id,
        first_name,
        last_name,
        code,
        handicap,
        tee_color: tee_color
            .parse::<TeeColor>()
            .map_err(|e| StorageError::new(e.to_string()))?,
    })
}

impl CourseRepository for SqliteRepository {
    fn list_courses(&self) -> Result<Vec<Course>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT course_id, name, holes, par, handicaps_blue, handicaps_white, handicaps_red
             FROM golf_course ORDER BY name",
        )?;
        let rows = stmt.query_map([], |row| -> rusqlite::Result<CourseRow> {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
            ))
        })?;
        rows.map(|row| course_from_row(row?)).collect()
    }

    fn get_course(&self, course_id: i64) -> Result<Course, StorageError> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT course_id, name, holes, par, handicaps_blue, handicaps_white, handicaps_red
                 FROM golf_course WHERE course_id = ?1",
                params![course_id],
                |row| -> rusqlite::Result<CourseRow> {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                        row.get(6)?,
                    ))
                },
            )
            .map_err(|_| StorageError::new(format!("course {course_id} not found")))?;
        course_from_row(row)
    }

    fn create_course(&self, new_course: &NewCourse) -> Result<Course, StorageError> {
        let course_id = {
            let conn = self.conn()?;
            conn.execute(
                "INSERT INTO golf_course (name, holes, par, handicaps_blue, handicaps_white, handicaps_red)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    new_course.name,
                    HOLES as i32,
                    serde_json::to_string(&new_course.par)?,
                    serde_json::to_string(&new_course.handicaps.blue)?,
                    serde_json::to_string(&new_course.handicaps.white)?,
                    serde_json::to_string(&new_course.handicaps.red)?,
                ],
            )?;
            conn.last_insert_rowid()
        };
        self.get_course(course_id)
    }

    fn update_course(&self, course: &Course) -> Result<(), StorageError> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE golf_course
             SET name = ?2, par = ?3, handicaps_blue = ?4, handicaps_white = ?5, handicaps_red = ?6
             WHERE course_id = ?1",
            params![
                course.id,
                course.name,
                serde_json::to_string(&course.par)?,
                serde_json::to_string(&course.handicaps.blue)?,
                serde_json::to_string(&course.handicaps.white)?,
                serde_json::to_string(&course.handicaps.red)?,
            ],
        )?;
        if updated == 0 {
            return Err(StorageError::new(format!("course {} not found", course.id)));
        }
        Ok(())
    }

    fn delete_course(&self, course_id: i64) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM golf_course WHERE course_id = ?1", params![course_id])?;
        Ok(())
    }
}

impl PlayerRepository for SqliteRepository {
    fn list_players(&self) -> Result<Vec<Player>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT player_id, first_name, last_name, code, handicap, tee_color
             FROM player ORDER BY code",
        )?;
        let rows = stmt.query_map([], |row| -> rusqlite::Result<PlayerRow> {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
            ))
        })?;
        rows.map(|row| player_from_row(row?)).collect()
    }

    fn get_player(&self, player_id: i64) -> Result<Player, StorageError> {
        let conn = self.conn()?;
        let row = conn
            .query_row(
                "SELECT player_id, first_name, last_name, code, handicap, tee_color
                 FROM player WHERE player_id = ?1",
                params![player_id],
                |row| -> rusqlite::Result<PlayerRow> {
                    Ok((
                        row.get(0)?,
                        row.get(1)?,
                        row.get(2)?,
                        row.get(3)?,
                        row.get(4)?,
                        row.get(5)?,
                    ))
                },
            )
            .map_err(|_| StorageError::new(format!("player {player_id} not found")))?;
        player_from_row(row)
    }

    fn create_player(&self, new_player: &NewPlayer) -> Result<Player, StorageError> {
        let player_id = {
            let conn = self.conn()?;
            conn.execute(
                "INSERT INTO player (first_name, last_name, code, handicap, tee_color)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    new_player.first_name,
                    new_player.last_name,
                    new_player.code,
                    new_player.handicap,
                    new_player.tee_color.as_str(),
                ],
            )?;
            conn.last_insert_rowid()
        };
        self.get_player(player_id)
    }

    fn update_player(&self, player: &Player) -> Result<(), StorageError> {
        let conn = self.conn()?;
        let updated = conn.execute(
            "UPDATE player
             SET first_name = ?2, last_name = ?3, code = ?4, handicap = ?5, tee_color = ?6
             WHERE player_id = ?1",
            params![
                player.id,
                player.first_name,
                player.last_name,
                player.code,
                player.handicap,
                player.tee_color.as_str(),
            ],
        )?;
        if updated == 0 {
            return Err(StorageError::new(format!("player {} not found", player.id)));
        }
        Ok(())
    }

    fn delete_player(&self, player_id: i64) -> Result<(), StorageError> {
        let conn = self.conn()?;
        conn.execute("DELETE FROM player WHERE player_id = ?1", params![player_id])?;
        Ok(())
    }
}

impl SessionRepository for SqliteRepository {
    fn create_session(
        &self,
        course_id: i64,
        date: NaiveDate,
        players: &[Player],
    ) -> Result<i64, StorageError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        tx.execute(
            "INSERT INTO game_session (course_id, session_date) VALUES (?1, ?2)",
            params![course_id, date.format(DATE_FMT).to_string()],
        )?;
        let session_id = tx.last_insert_rowid();
        for player in players {
            tx.execute(
                "INSERT INTO session_player (session_id, player_id, handicap) VALUES (?1, ?2, ?3)",
                params![session_id, player.id, player.handicap],
            )?;
        }
        tx.commit()?;
        Ok(session_id)
    }

    fn save_round_results(
        &self,
        session_id: i64,
        results: &[RoundResult],
    ) -> Result<(), StorageError> {
        let mut conn = self.conn()?;
        let tx = conn.transaction()?;
        {
            let mut stmt = tx.prepare(
                "INSERT OR REPLACE INTO hole_result (session_id, player_id, hole, strokes, putts, net_strokes)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for result in results {
                for hole in &result.hole_results {
                    stmt.execute(params![
                        session_id,
                        result.player_id,
                        hole.hole,
                        hole.strokes,
                        hole.putts,
                        hole.net_strokes,
                    ])?;
                }
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn get_session(&self, session_id: i64) -> Result<GameSession, StorageError> {
        let (course_id, date) = {
            let conn = self.conn()?;
            conn.query_row(
                "SELECT course_id, session_date FROM game_session WHERE session_id = ?1",
                params![session_id],
                |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)),
            )
            .map_err(|_| StorageError::new(format!("session {session_id} not found")))?
        };
        self.load_session(session_id, course_id, &date)
    }

    fn list_sessions(&self) -> Result<Vec<GameSession>, StorageError> {
        let headers: Vec<(i64, i64, String)> = {
            let conn = self.conn()?;
            let mut stmt = conn.prepare(
                "SELECT session_id, course_id, session_date
                 FROM game_session ORDER BY session_date DESC, session_id DESC",
            )?;
            let rows = stmt
                .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))?
                .collect::<Result<Vec<_>, _>>()?;
            rows
        };

        headers
            .into_iter()
            .map(|(session_id, course_id, date)| self.load_session(session_id, course_id, &date))
            .collect()
    }
}

impl SqliteRepository {
    fn load_session(
        &self,
        session_id: i64,
        course_id: i64,
        date: &str,
    ) -> Result<GameSession, StorageError> {
        let course = self.get_course(course_id)?;
        let date = NaiveDate::parse_from_str(date, DATE_FMT)
            .map_err(|e| StorageError::new(format!("session {session_id}: bad date: {e}")))?;

        let conn = self.conn()?;
        // snapshot handicap from session_player, everything else current
        let mut stmt = conn.prepare(
            "SELECT p.player_id, p.first_name, p.last_name, p.code, sp.handicap, p.tee_color
             FROM session_player sp
             JOIN player p ON p.player_id = sp.player_id
             WHERE sp.session_id = ?1
             ORDER BY p.player_id",
        )?;
        let player_rows = stmt
            .query_map(params![session_id], |row| -> rusqlite::Result<PlayerRow> {
                Ok((
                    row.get(0)?,
                    row.get(1)?,
                    row.get(2)?,
                    row.get(3)?,
                    row.get(4)?,
                    row.get(5)?,
                ))
            })?
            .collect::<Result<Vec<PlayerRow>, _>>()?;
        let players = player_rows
            .into_iter()
            .map(player_from_row)
            .collect::<Result<Vec<_>, _>>()?;

        let mut stmt = conn.prepare(
            "SELECT player_id, hole, strokes, putts, net_strokes
             FROM hole_result WHERE session_id = ?1
             ORDER BY player_id, hole",
        )?;
        let hole_rows = stmt
            .query_map(params![session_id], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i32>(1)?,
                    row.get::<_, i32>(2)?,
                    row.get::<_, i32>(3)?,
                    row.get::<_, i32>(4)?,
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;

        let mut holes_by_player: BTreeMap<i64, Vec<HoleResult>> = BTreeMap::new();
        for (player_id, hole, strokes, putts, net_strokes) in hole_rows {
            holes_by_player.entry(player_id).or_default().push(HoleResult {
                hole,
                strokes,
                putts,
                net_strokes,
            });
        }

        // totals are re-derived from the stored hole rows, never stored;
        // a player with no saved holes gets no result rather than an
        // empty one
        let results = players
            .iter()
            .filter_map(|player| {
                holes_by_player
                    .remove(&player.id)
                    .map(|holes| assemble_round_result(player.id, holes))
            })
            .collect();

        Ok(GameSession {
            id: session_id,
            course,
            date,
            players,
            results,
        })
    }
}
