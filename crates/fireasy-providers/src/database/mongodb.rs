//! MongoDB database provider
//!
//! MongoDB connection strings are URLs:
//!
//! ```text
//! mongodb://[user[:password]@]host[:port][,host[:port]...][/database][?key=value&...]
//! ```
//!
//! The first host becomes `server`/`port`; a multi-host seed list is kept in
//! the `hosts` property. Query options map to `properties`. Values are taken
//! verbatim (no percent-decoding). The provider is not featured.

use std::sync::Arc;

use fireasy_domain::constants::{MONGODB_SCHEME, MONGODB_SRV_SCHEME, PROVIDER_MONGODB};
use fireasy_domain::error::{Error, Result};
use fireasy_domain::ports::providers::DatabaseProvider;
use fireasy_domain::value_objects::{ConnectionParameter, ConnectionString};

/// Property holding the full seed list when more than one host is given
pub const HOSTS_PROPERTY: &str = "hosts";

/// MongoDB URL adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoDbProvider;

impl MongoDbProvider {
    /// Create the provider
    pub fn new() -> Self {
        Self
    }
}

impl DatabaseProvider for MongoDbProvider {
    fn provider_name(&self) -> &str {
        PROVIDER_MONGODB
    }

    fn get_connection_parameter(
        &self,
        connection: &ConnectionString,
    ) -> Result<ConnectionParameter> {
        let url = MongoUrl::parse(connection.raw())?;
        let (server, port) = url.hosts[0].clone();

        let mut parameter = ConnectionParameter {
            server: Some(server).filter(|s| !s.is_empty()),
            database: url.database.clone(),
            user_id: url.user.clone(),
            password: url.password.clone(),
            port,
            ..ConnectionParameter::default()
        };
        if url.hosts.len() > 1 {
            parameter
                .properties
                .insert(HOSTS_PROPERTY.to_string(), url.render_hosts());
        }
        for (key, value) in url.options {
            parameter.properties.insert(key, value);
        }
        Ok(parameter)
    }

    fn update_connection_string(
        &self,
        connection: &ConnectionString,
        parameter: &ConnectionParameter,
    ) -> Result<ConnectionString> {
        let mut url = MongoUrl::parse(connection.raw())?;

        if let Some(server) = &parameter.server {
            url.hosts[0].0 = server.clone();
        }
        if let Some(port) = parameter.port {
            url.hosts[0].1 = Some(port);
        }
        if parameter.user_id.is_some() {
            url.user = parameter.user_id.clone();
        }
        if parameter.password.is_some() {
            url.password = parameter.password.clone();
        }
        if parameter.database.is_some() {
            url.database = parameter.database.clone();
        }
        for (key, value) in &parameter.properties {
            if key == HOSTS_PROPERTY {
                continue;
            }
            match url.options.iter_mut().find(|(k, _)| k == key) {
                Some(option) => option.1 = value.clone(),
                None => url.options.push((key.clone(), value.clone())),
            }
        }

        let mut updated = connection.clone();
        updated.replace_url(url.render());
        Ok(updated)
    }
}

/// Parsed MongoDB URL
#[derive(Debug, Clone, PartialEq, Eq)]
struct MongoUrl {
    scheme: &'static str,
    user: Option<String>,
    password: Option<String>,
    hosts: Vec<(String, Option<u16>)>,
    database: Option<String>,
    options: Vec<(String, String)>,
}

impl MongoUrl {
    fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let (scheme, rest) = [MONGODB_SRV_SCHEME, MONGODB_SCHEME]
            .into_iter()
            .find_map(|scheme| raw.strip_prefix(scheme).map(|rest| (scheme, rest)))
            .ok_or_else(|| {
                Error::invalid_connection_string(format!(
                    "MongoDB connection string must start with '{MONGODB_SCHEME}'"
                ))
            })?;

        let (authority, path) = match rest.split_once('/') {
            Some((authority, path)) => (authority, path),
            None => match rest.split_once('?') {
                Some((authority, _)) => (authority, &rest[authority.len()..]),
                None => (rest, ""),
            },
        };

        let (user, password, host_list) = match authority.rsplit_once('@') {
            Some((userinfo, hosts)) => {
                let (user, password) = match userinfo.split_once(':') {
                    Some((user, password)) => (user, Some(password.to_string())),
                    None => (userinfo, None),
                };
                (Some(user.to_string()), password, hosts)
            }
            None => (None, None, authority),
        };

        let hosts = host_list
            .split(',')
            .map(parse_host)
            .collect::<Result<Vec<_>>>()?;
        if hosts.iter().all(|(host, _)| host.is_empty()) {
            return Err(Error::invalid_connection_string(
                "MongoDB connection string has no host",
            ));
        }

        let (database, query) = match path.split_once('?') {
            Some((database, query)) => (database, query),
            None => (path, ""),
        };
        let options = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| match pair.split_once('=') {
                Some((key, value)) => (key.to_string(), value.to_string()),
                None => (pair.to_string(), String::new()),
            })
            .collect();

        Ok(Self {
            scheme,
            user: user.filter(|u| !u.is_empty()),
            password,
            hosts,
            database: Some(database.to_string()).filter(|d| !d.is_empty()),
            options,
        })
    }

    fn render_hosts(&self) -> String {
        self.hosts
            .iter()
            .map(|(host, port)| match port {
                Some(port) => format!("{host}:{port}"),
                None => host.clone(),
            })
            .collect::<Vec<_>>()
            .join(",")
    }

    fn render(&self) -> String {
        let mut url = String::from(self.scheme);
        if let Some(user) = &self.user {
            url.push_str(user);
            if let Some(password) = &self.password {
                url.push(':');
                url.push_str(password);
            }
            url.push('@');
        }
        url.push_str(&self.render_hosts());
        if self.database.is_some() || !self.options.is_empty() {
            url.push('/');
        }
        if let Some(database) = &self.database {
            url.push_str(database);
        }
        if !self.options.is_empty() {
            url.push('?');
            let query: Vec<String> = self
                .options
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect();
            url.push_str(&query.join("&"));
        }
        url
    }
}

fn parse_host(host: &str) -> Result<(String, Option<u16>)> {
    let host = host.trim();
    // IPv6 literals keep their brackets: [::1]:27017
    let split = if host.starts_with('[') {
        host.rfind("]:").map(|i| (&host[..=i], &host[i + 2..]))
    } else {
        host.rsplit_once(':')
    };
    match split {
        Some((name, port)) => {
            let port = port.parse::<u16>().map_err(|_| {
                Error::invalid_connection_string(format!("invalid MongoDB port '{port}'"))
            })?;
            Ok((name.to_string(), Some(port)))
        }
        None => Ok((host.to_string(), None)),
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

use fireasy_application::ports::registry::{
    DATABASE_PROVIDERS, DatabaseProviderEntry, TYPE_DESCRIPTORS, TypeDescriptorEntry,
};

fn create_mongodb_provider() -> Arc<dyn DatabaseProvider> {
    Arc::new(MongoDbProvider::new())
}

#[linkme::distributed_slice(DATABASE_PROVIDERS)]
static MONGODB_PROVIDER: DatabaseProviderEntry = DatabaseProviderEntry {
    name: PROVIDER_MONGODB,
    description: "MongoDB URL adapter",
    factory: create_mongodb_provider,
};

#[linkme::distributed_slice(TYPE_DESCRIPTORS)]
static MONGODB_TYPE: TypeDescriptorEntry = TypeDescriptorEntry {
    name: "fireasy_providers::database::MongoDbProvider",
    aliases: &["MongoDbProvider", PROVIDER_MONGODB],
    description: "MongoDB URL adapter",
    provider_factory: Some(create_mongodb_provider),
};
