#[macro_use]
extern crate diesel;

use anyhow::Result as Fallible;
use diesel::{r2d2, sqlite::SqliteConnection, Connection as _, RunQueryDsl as _};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::{cell::RefCell, sync::Arc};

mod models;
mod repo_impl;
mod schema;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

type ConnectionManager = r2d2::ConnectionManager<SqliteConnection>;
type ConnectionPool = r2d2::Pool<ConnectionManager>;
type PooledConnection = r2d2::PooledConnection<ConnectionManager>;

/// Shared access to the survey comment store.
pub struct DbReadOnly<'a> {
    _guard: RwLockReadGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

/// Exclusive access to the survey comment store.
///
/// While alive no other connection, neither reading
/// nor writing, is handed out.
pub struct DbReadWrite<'a> {
    _guard: RwLockWriteGuard<'a, ConnectionPool>,
    conn: RefCell<PooledConnection>,
}

fn checkout(pool: &ConnectionPool, access: &str) -> Fallible<PooledConnection> {
    pool.get().map_err(|err| {
        log::error!("No database connection available for {access} access: {err}");
        err.into()
    })
}

/// Pool of SQLite connections guarded by a single writer lock.
///
/// Readers may run concurrently, writers run alone.
#[derive(Clone)]
pub struct Connections {
    pool: Arc<RwLock<ConnectionPool>>,
}

impl Connections {
    pub fn init(url: &str, pool_size: u32) -> Fallible<Self> {
        // Fail fast on unusable database paths instead of
        // letting the pool retry in the background.
        SqliteConnection::establish(url)?;
        let pool = ConnectionPool::builder()
            .max_size(pool_size)
            .build(ConnectionManager::new(url))?;
        configure(&mut *pool.get()?)?;
        Ok(Self {
            pool: Arc::new(RwLock::new(pool)),
        })
    }

    pub fn shared(&self) -> Fallible<DbReadOnly> {
        let guard = self.pool.read();
        let conn = checkout(&guard, "read-only")?;
        Ok(DbReadOnly {
            _guard: guard,
            conn: RefCell::new(conn),
        })
    }

    pub fn exclusive(&self) -> Fallible<DbReadWrite> {
        let guard = self.pool.write();
        let conn = checkout(&guard, "read/write")?;
        Ok(DbReadWrite {
            _guard: guard,
            conn: RefCell::new(conn),
        })
    }
}

fn configure(conn: &mut SqliteConnection) -> Fallible<()> {
    diesel::sql_query(
        r#"
PRAGMA journal_mode = WAL;
PRAGMA synchronous = NORMAL;
PRAGMA encoding = 'UTF-8';
"#,
    )
    .execute(conn)?;
    Ok(())
}

pub fn run_embedded_database_migrations(db: DbReadWrite<'_>) -> Fallible<()> {
    log::info!("Running embedded database migrations");
    let mut conn = db.conn.borrow_mut();
    let versions = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| anyhow::anyhow!("Failed to run database migrations: {err}"))?;
    for version in versions {
        log::debug!("Applied database migration {version}");
    }
    Ok(())
}
