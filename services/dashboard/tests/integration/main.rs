mod activities_test;
mod creators_test;
mod missions_test;
