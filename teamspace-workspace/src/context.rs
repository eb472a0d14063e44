//! The workspace context: user, project, and post operations over a
//! [`JsonStore`].

use teamspace_blocks::{resolver, DocumentStore, Mention, MentionKind};
use teamspace_common::{PostId, ProjectId, UserId};
use teamspace_kanban::BoardStore;
use teamspace_store::JsonStore;
use tracing::debug;

use crate::error::{Result, WorkspaceError};
use crate::types::{Post, Project, Role, User, UserPatch};

/// Singleton collection user accounts are stored under
pub const USERS_COLLECTION: &str = "users";

/// Singleton collection projects are stored under
pub const PROJECTS_COLLECTION: &str = "projects";

/// Singleton collection posts are stored under
pub const POSTS_COLLECTION: &str = "posts";

/// Seeded admin account, created when the user collection is empty
pub const DEFAULT_ADMIN_NAME: &str = "Admin";
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@teamspace.local";
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin";

/// The three candidate pools the mention resolver searches
#[derive(Debug, Clone, Default)]
pub struct MentionPools {
    pub users: Vec<Mention>,
    pub posts: Vec<Mention>,
    pub projects: Vec<Mention>,
}

impl MentionPools {
    /// Resolve a mention query against the pools: users first, then posts,
    /// then projects, capped at the resolver limit
    pub fn resolve(&self, query: &str) -> Vec<Mention> {
        resolver::resolve(query, &self.users, &self.posts, &self.projects)
    }
}

/// Operations on the workspace directory.
///
/// Wraps a [`JsonStore`] and loads, mutates, and saves whole collections
/// per operation. Cascades live here: deleting a post also removes its
/// document and board collections, and deleting a project cascades
/// through every post filed under it.
#[derive(Debug, Clone)]
pub struct WorkspaceContext {
    store: JsonStore,
}

impl WorkspaceContext {
    /// Opens the workspace, seeding the default admin account when no
    /// users exist yet.
    pub async fn open(store: JsonStore) -> Result<Self> {
        let context = Self { store };
        context.ensure_default_admin().await?;
        Ok(context)
    }

    /// The underlying store.
    pub fn store(&self) -> &JsonStore {
        &self.store
    }

    async fn ensure_default_admin(&self) -> Result<()> {
        let users = self.load_users().await?;
        if users.is_empty() {
            let admin = User::new(DEFAULT_ADMIN_NAME, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_PASSWORD)
                .with_role(Role::Admin);
            self.save_users(&[admin]).await?;
            debug!("seeded default admin account");
        }
        Ok(())
    }

    // =====================================================================
    // Users
    // =====================================================================

    /// Registers a new member account. The email must not collide with an
    /// existing account; comparison is case-insensitive.
    pub async fn register(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<User> {
        let email = email.into();
        let lowered = email.to_lowercase();

        let mut users = self.load_users().await?;
        if users.iter().any(|u| u.email.to_lowercase() == lowered) {
            return Err(WorkspaceError::DuplicateEmail { email });
        }

        let user = User::new(name, email, password);
        users.push(user.clone());
        self.save_users(&users).await?;
        Ok(user)
    }

    /// Checks credentials and returns the matching account, if any. The
    /// email matches case-insensitively, the password exactly.
    pub async fn login(&self, email: &str, password: &str) -> Result<Option<User>> {
        let lowered = email.to_lowercase();
        let users = self.load_users().await?;
        Ok(users
            .into_iter()
            .find(|u| u.email.to_lowercase() == lowered && u.password == password))
    }

    /// Applies a profile patch and returns the updated account.
    pub async fn update_profile(&self, id: &UserId, patch: UserPatch) -> Result<User> {
        let mut users = self.load_users().await?;
        let Some(user) = users.iter_mut().find(|u| &u.id == id) else {
            return Err(WorkspaceError::UserNotFound { id: id.to_string() });
        };
        patch.apply(user);
        let updated = user.clone();
        self.save_users(&users).await?;
        Ok(updated)
    }

    /// Changes an account's role.
    pub async fn set_role(&self, id: &UserId, role: Role) -> Result<()> {
        let mut users = self.load_users().await?;
        let Some(user) = users.iter_mut().find(|u| &u.id == id) else {
            return Err(WorkspaceError::UserNotFound { id: id.to_string() });
        };
        user.role = role;
        self.save_users(&users).await?;
        Ok(())
    }

    /// Deletes an account.
    pub async fn delete_user(&self, id: &UserId) -> Result<()> {
        let mut users = self.load_users().await?;
        let before = users.len();
        users.retain(|u| &u.id != id);
        if users.len() == before {
            return Err(WorkspaceError::UserNotFound { id: id.to_string() });
        }
        self.save_users(&users).await?;
        Ok(())
    }

    /// All registered accounts.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        self.load_users().await
    }

    // =====================================================================
    // Projects
    // =====================================================================

    /// Creates a project after the existing ones.
    pub async fn create_project(&self, name: impl Into<String>) -> Result<Project> {
        let mut projects = self.load_projects().await?;
        let project = Project::new(name, projects.len());
        projects.push(project.clone());
        self.save_projects(&projects).await?;
        Ok(project)
    }

    /// Renames a project.
    pub async fn rename_project(&self, id: &ProjectId, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        let mut projects = self.load_projects().await?;
        let Some(project) = projects.iter_mut().find(|p| &p.id == id) else {
            return Err(WorkspaceError::ProjectNotFound { id: id.to_string() });
        };
        project.name = name;
        self.save_projects(&projects).await?;
        Ok(())
    }

    /// Deletes a project and cascades through its posts: each post is
    /// removed along with its document and board collections.
    pub async fn delete_project(&self, id: &ProjectId) -> Result<()> {
        let mut projects = self.load_projects().await?;
        let before = projects.len();
        projects.retain(|p| &p.id != id);
        if projects.len() == before {
            return Err(WorkspaceError::ProjectNotFound { id: id.to_string() });
        }

        let posts = self.load_posts().await?;
        let (cascaded, kept): (Vec<Post>, Vec<Post>) =
            posts.into_iter().partition(|p| &p.project_id == id);

        self.save_projects(&projects).await?;
        self.save_posts(&kept).await?;
        for post in &cascaded {
            self.remove_post_collections(&post.id).await?;
        }
        debug!("deleted project {} and {} posts", id, cascaded.len());
        Ok(())
    }

    /// All projects, sorted for display.
    pub async fn list_projects(&self) -> Result<Vec<Project>> {
        let mut projects = self.load_projects().await?;
        projects.sort_by_key(|p| p.order);
        Ok(projects)
    }

    // =====================================================================
    // Posts
    // =====================================================================

    /// Creates a post at the bottom of a project.
    pub async fn create_post(
        &self,
        project_id: &ProjectId,
        title: impl Into<String>,
    ) -> Result<Post> {
        let projects = self.load_projects().await?;
        if !projects.iter().any(|p| &p.id == project_id) {
            return Err(WorkspaceError::ProjectNotFound {
                id: project_id.to_string(),
            });
        }

        let mut posts = self.load_posts().await?;
        let order = posts
            .iter()
            .filter(|p| &p.project_id == project_id)
            .count();
        let post = Post::new(project_id.clone(), title, order);
        posts.push(post.clone());
        self.save_posts(&posts).await?;
        Ok(post)
    }

    /// Retitles a post.
    pub async fn rename_post(&self, id: &PostId, title: impl Into<String>) -> Result<()> {
        let title = title.into();
        let mut posts = self.load_posts().await?;
        let Some(post) = posts.iter_mut().find(|p| &p.id == id) else {
            return Err(WorkspaceError::PostNotFound { id: id.to_string() });
        };
        post.title = title;
        self.save_posts(&posts).await?;
        Ok(())
    }

    /// Files a post under another project. The order value is left as it
    /// is; display ties are resolved by the stable sort in
    /// [`posts_in_project`](Self::posts_in_project).
    pub async fn move_post(&self, id: &PostId, target: &ProjectId) -> Result<()> {
        let projects = self.load_projects().await?;
        if !projects.iter().any(|p| &p.id == target) {
            return Err(WorkspaceError::ProjectNotFound {
                id: target.to_string(),
            });
        }

        let mut posts = self.load_posts().await?;
        let Some(post) = posts.iter_mut().find(|p| &p.id == id) else {
            return Err(WorkspaceError::PostNotFound { id: id.to_string() });
        };
        post.project_id = target.clone();
        self.save_posts(&posts).await?;
        Ok(())
    }

    /// Deletes a post along with its document and board collections.
    pub async fn delete_post(&self, id: &PostId) -> Result<()> {
        let mut posts = self.load_posts().await?;
        let before = posts.len();
        posts.retain(|p| &p.id != id);
        if posts.len() == before {
            return Err(WorkspaceError::PostNotFound { id: id.to_string() });
        }
        self.save_posts(&posts).await?;
        self.remove_post_collections(id).await?;
        Ok(())
    }

    /// The posts filed under one project, sorted for display.
    pub async fn posts_in_project(&self, project_id: &ProjectId) -> Result<Vec<Post>> {
        let mut posts: Vec<Post> = self
            .load_posts()
            .await?
            .into_iter()
            .filter(|p| &p.project_id == project_id)
            .collect();
        posts.sort_by_key(|p| p.order);
        Ok(posts)
    }

    /// All posts across all projects.
    pub async fn list_posts(&self) -> Result<Vec<Post>> {
        self.load_posts().await
    }

    // =====================================================================
    // Mentions
    // =====================================================================

    /// Builds the resolver candidate pools from the current directory:
    /// one mention per user, post, and project.
    pub async fn mention_pools(&self) -> Result<MentionPools> {
        let users = self.load_users().await?;
        let posts = self.load_posts().await?;
        let projects = self.load_projects().await?;

        Ok(MentionPools {
            users: users
                .iter()
                .map(|u| Mention::new(u.id.as_str(), MentionKind::User, &u.name))
                .collect(),
            posts: posts
                .iter()
                .map(|p| Mention::new(p.id.as_str(), MentionKind::Post, &p.title))
                .collect(),
            projects: projects
                .iter()
                .map(|p| Mention::new(p.id.as_str(), MentionKind::Project, &p.name))
                .collect(),
        })
    }

    // =====================================================================
    // Internals
    // =====================================================================

    async fn remove_post_collections(&self, post_id: &PostId) -> Result<()> {
        self.store.remove_blocks(post_id).await?;
        self.store.remove_board(post_id).await?;
        Ok(())
    }

    async fn load_users(&self) -> Result<Vec<User>> {
        Ok(self.store.load_all(USERS_COLLECTION).await?)
    }

    async fn save_users(&self, users: &[User]) -> Result<()> {
        Ok(self.store.save_all(USERS_COLLECTION, users).await?)
    }

    async fn load_projects(&self) -> Result<Vec<Project>> {
        Ok(self.store.load_all(PROJECTS_COLLECTION).await?)
    }

    async fn save_projects(&self, projects: &[Project]) -> Result<()> {
        Ok(self.store.save_all(PROJECTS_COLLECTION, projects).await?)
    }

    async fn load_posts(&self) -> Result<Vec<Post>> {
        Ok(self.store.load_all(POSTS_COLLECTION).await?)
    }

    async fn save_posts(&self, posts: &[Post]) -> Result<()> {
        Ok(self.store.save_all(POSTS_COLLECTION, posts).await?)
    }
}
