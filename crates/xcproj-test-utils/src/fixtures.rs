//! Project file fixtures in the exact layout Xcode writes.
//!
//! Object ids are fixed so tests can address objects directly.

/// Id of the `PBXProject` root object in [`APP_PROJECT`].
pub const APP_ROOT_OBJECT: &str = "A10000000000000000000001";
/// Id of the main group in [`APP_PROJECT`].
pub const APP_MAIN_GROUP: &str = "A20000000000000000000001";
/// Id of the `App` group in [`APP_PROJECT`].
pub const APP_SOURCE_GROUP: &str = "A20000000000000000000002";
/// Id of the `main.m` file reference in [`APP_PROJECT`].
pub const APP_MAIN_FILE: &str = "A30000000000000000000001";
/// Id of the `AppDelegate.m` file reference, listed before `main.m` in the
/// `App` group.
pub const APP_DELEGATE_FILE: &str = "A30000000000000000000002";
/// Id of the `App` target's sources phase in [`APP_PROJECT`].
pub const APP_SOURCES_PHASE: &str = "A50000000000000000000001";
/// Id of the `App` target's resources phase in [`APP_PROJECT`].
pub const APP_RESOURCES_PHASE: &str = "A50000000000000000000003";
/// Id of the `AppTests` target's sources phase in [`APP_PROJECT`].
pub const TESTS_SOURCES_PHASE: &str = "A50000000000000000000004";
/// Id of the main group in [`EMPTY_PROJECT`].
pub const EMPTY_MAIN_GROUP: &str = "B20000000000000000000001";

/// A small application project.
///
/// Targets `App` (sources with `main.m` and `AppDelegate.m`, frameworks,
/// empty resources) and `AppTests` (empty sources). Files live in an `App`
/// group with `path = App`.
pub const APP_PROJECT: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	classes = {
	};
	objectVersion = 46;
	objects = {

/* Begin PBXBuildFile section */
		A40000000000000000000001 /* main.m in Sources */ = {isa = PBXBuildFile; fileRef = A30000000000000000000001 /* main.m */; };
		A40000000000000000000002 /* AppDelegate.m in Sources */ = {isa = PBXBuildFile; fileRef = A30000000000000000000002 /* AppDelegate.m */; };
/* End PBXBuildFile section */

/* Begin PBXFileReference section */
		A30000000000000000000001 /* main.m */ = {isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = sourcecode.c.objc; path = main.m; sourceTree = "<group>"; };
		A30000000000000000000002 /* AppDelegate.m */ = {isa = PBXFileReference; fileEncoding = 4; lastKnownFileType = sourcecode.c.objc; path = AppDelegate.m; sourceTree = "<group>"; };
		A30000000000000000000003 /* App.app */ = {isa = PBXFileReference; explicitFileType = wrapper.application; includeInIndex = 0; path = App.app; sourceTree = BUILT_PRODUCTS_DIR; };
/* End PBXFileReference section */

/* Begin PBXFrameworksBuildPhase section */
		A50000000000000000000002 /* Frameworks */ = {
			isa = PBXFrameworksBuildPhase;
			buildActionMask = 2147483647;
			files = (
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
/* End PBXFrameworksBuildPhase section */

/* Begin PBXGroup section */
		A20000000000000000000001 = {
			isa = PBXGroup;
			children = (
				A20000000000000000000002 /* App */,
				A20000000000000000000003 /* Products */,
			);
			sourceTree = "<group>";
		};
		A20000000000000000000002 /* App */ = {
			isa = PBXGroup;
			children = (
				A30000000000000000000002 /* AppDelegate.m */,
				A30000000000000000000001 /* main.m */,
			);
			path = App;
			sourceTree = "<group>";
		};
		A20000000000000000000003 /* Products */ = {
			isa = PBXGroup;
			children = (
				A30000000000000000000003 /* App.app */,
			);
			name = Products;
			sourceTree = "<group>";
		};
/* End PBXGroup section */

/* Begin PBXNativeTarget section */
		A60000000000000000000001 /* App */ = {
			isa = PBXNativeTarget;
			buildConfigurationList = A70000000000000000000002 /* Build configuration list for PBXNativeTarget "App" */;
			buildPhases = (
				A50000000000000000000001 /* Sources */,
				A50000000000000000000002 /* Frameworks */,
				A50000000000000000000003 /* Resources */,
			);
			buildRules = (
			);
			dependencies = (
			);
			name = App;
			productName = App;
			productReference = A30000000000000000000003 /* App.app */;
			productType = "com.apple.product-type.application";
		};
		A60000000000000000000002 /* AppTests */ = {
			isa = PBXNativeTarget;
			buildConfigurationList = A70000000000000000000003 /* Build configuration list for PBXNativeTarget "AppTests" */;
			buildPhases = (
				A50000000000000000000004 /* Sources */,
			);
			buildRules = (
			);
			dependencies = (
			);
			name = AppTests;
			productName = AppTests;
			productType = "com.apple.product-type.bundle.unit-test";
		};
/* End PBXNativeTarget section */

/* Begin PBXProject section */
		A10000000000000000000001 /* Project object */ = {
			isa = PBXProject;
			attributes = {
				LastUpgradeCheck = 1500;
			};
			buildConfigurationList = A70000000000000000000001 /* Build configuration list for PBXProject "App" */;
			compatibilityVersion = "Xcode 3.2";
			developmentRegion = en;
			hasScannedForEncodings = 0;
			knownRegions = (
				en,
				Base,
			);
			mainGroup = A20000000000000000000001;
			productRefGroup = A20000000000000000000003 /* Products */;
			projectDirPath = "";
			projectRoot = "";
			targets = (
				A60000000000000000000001 /* App */,
				A60000000000000000000002 /* AppTests */,
			);
		};
/* End PBXProject section */

/* Begin PBXResourcesBuildPhase section */
		A50000000000000000000003 /* Resources */ = {
			isa = PBXResourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
/* End PBXResourcesBuildPhase section */

/* Begin PBXSourcesBuildPhase section */
		A50000000000000000000001 /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
				A40000000000000000000001 /* main.m in Sources */,
				A40000000000000000000002 /* AppDelegate.m in Sources */,
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
		A50000000000000000000004 /* Sources */ = {
			isa = PBXSourcesBuildPhase;
			buildActionMask = 2147483647;
			files = (
			);
			runOnlyForDeploymentPostprocessing = 0;
		};
/* End PBXSourcesBuildPhase section */

/* Begin XCBuildConfiguration section */
		A80000000000000000000001 /* Debug */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				PRODUCT_NAME = "$(TARGET_NAME)";
			};
			name = Debug;
		};
		A80000000000000000000002 /* Debug */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				PRODUCT_NAME = "$(TARGET_NAME)";
			};
			name = Debug;
		};
		A80000000000000000000003 /* Debug */ = {
			isa = XCBuildConfiguration;
			buildSettings = {
				PRODUCT_NAME = "$(TARGET_NAME)";
			};
			name = Debug;
		};
/* End XCBuildConfiguration section */

/* Begin XCConfigurationList section */
		A70000000000000000000001 /* Build configuration list for PBXProject "App" */ = {
			isa = XCConfigurationList;
			buildConfigurations = (
				A80000000000000000000001 /* Debug */,
			);
			defaultConfigurationIsVisible = 0;
			defaultConfigurationName = Debug;
		};
		A70000000000000000000002 /* Build configuration list for PBXNativeTarget "App" */ = {
			isa = XCConfigurationList;
			buildConfigurations = (
				A80000000000000000000002 /* Debug */,
			);
			defaultConfigurationIsVisible = 0;
			defaultConfigurationName = Debug;
		};
		A70000000000000000000003 /* Build configuration list for PBXNativeTarget "AppTests" */ = {
			isa = XCConfigurationList;
			buildConfigurations = (
				A80000000000000000000003 /* Debug */,
			);
			defaultConfigurationIsVisible = 0;
			defaultConfigurationName = Debug;
		};
/* End XCConfigurationList section */
	};
	rootObject = A10000000000000000000001 /* Project object */;
}
"#;

/// A project with only a root object and an empty main group.
pub const EMPTY_PROJECT: &str = r#"// !$*UTF8*$!
{
	archiveVersion = 1;
	classes = {
	};
	objectVersion = 46;
	objects = {

/* Begin PBXGroup section */
		B20000000000000000000001 = {
			isa = PBXGroup;
			children = (
			);
			sourceTree = "<group>";
		};
/* End PBXGroup section */

/* Begin PBXProject section */
		B10000000000000000000001 /* Project object */ = {
			isa = PBXProject;
			attributes = {
			};
			compatibilityVersion = "Xcode 3.2";
			developmentRegion = en;
			hasScannedForEncodings = 0;
			mainGroup = B20000000000000000000001;
			projectDirPath = "";
			projectRoot = "";
			targets = (
			);
		};
/* End PBXProject section */
	};
	rootObject = B10000000000000000000001 /* Project object */;
}
"#;
