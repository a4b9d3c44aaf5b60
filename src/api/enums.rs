use md5::{Digest, Md5};
use sha1::Sha1;
use std::io::{self, Read};

wire_enum! {
    pub enum CoreApiStatus {
        Private = 1,
        Public = 2,
    }
}

wire_enum! {
    pub enum CoreStatus {
        Draft = 1,
        Test = 2,
        PendingReview = 3,
        Rejected = 4,
        Approved = 5,
        Live = 6,
    }
}

wire_enum! {
    /// How a file relates to the mod it depends on.
    pub enum FileRelationType {
        EmbeddedLibrary = 1,
        OptionalDependency = 2,
        RequiredDependency = 3,
        Tool = 4,
        Incompatible = 5,
        Include = 6,
    }
}

wire_enum! {
    pub enum FileReleaseType {
        Release = 1,
        Beta = 2,
        Alpha = 3,
    }
}

wire_enum! {
    pub enum FileStatus {
        Processing = 1,
        ChangesRequired = 2,
        UnderReview = 3,
        Approved = 4,
        Rejected = 5,
        MalwareDetected = 6,
        Deleted = 7,
        Archived = 8,
        Testing = 9,
        Released = 10,
        ReadyForReview = 11,
        Deprecated = 12,
        Baking = 13,
        AwaitingPublishing = 14,
        FailedPublishing = 15,
    }
}

wire_enum! {
    pub enum GameVersionStatus {
        Approved = 1,
        Deleted = 2,
        New = 3,
    }
}

wire_enum! {
    pub enum GameVersionTypeStatus {
        Normal = 1,
        Deleted = 2,
    }
}

wire_enum! {
    pub enum HashAlgo {
        Sha1 = 1,
        Md5 = 2,
    }
}

wire_enum! {
    pub enum ModLoaderInstallMethod {
        ForgeInstaller = 1,
        ForgeJarInstall = 2,
        ForgeInstallerV2 = 3 as "ForgeInstaller_v2",
    }
}

wire_enum! {
    /// The only enum whose codes start at 0.
    pub enum ModLoaderType {
        Any = 0,
        Forge = 1,
        Cauldron = 2,
        LiteLoader = 3,
        Fabric = 4,
        Quilt = 5,
    }
}

wire_enum! {
    /// Sort keys accepted by mod search. Sent as the integer code in the query string.
    pub enum ModSearchSortField {
        Featured = 1,
        Popularity = 2,
        LastUpdated = 3,
        Name = 4,
        Author = 5,
        TotalDownloads = 6,
        Category = 7,
        GameVersion = 8,
    }
}

wire_enum! {
    pub enum ModStatus {
        New = 1,
        ChangesRequired = 2,
        UnderSoftReview = 3,
        Approved = 4,
        Rejected = 5,
        ChangesMade = 6,
        Inactive = 7,
        Abandoned = 8,
        Deleted = 9,
        UnderReview = 10,
    }
}

impl HashAlgo {
    /* Lowercase hex digest of everything the reader yields.
     * The reader is streamed through the hasher, so large files aren't loaded into memory. */
    pub fn digest<R: Read>(self, reader: &mut R) -> Result<String, io::Error> {
        match self {
            HashAlgo::Md5 => {
                let mut hasher = Md5::new();
                io::copy(reader, &mut hasher)?;
                Ok(format!("{:x}", hasher.finalize()))
            }
            HashAlgo::Sha1 => {
                let mut hasher = Sha1::new();
                io::copy(reader, &mut hasher)?;
                Ok(format!("{:x}", hasher.finalize()))
            }
        }
    }
}
